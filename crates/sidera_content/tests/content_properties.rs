//! Property tests over the placement content table.

use pretty_assertions::assert_eq;
use sidera_content::{
    content_for_placement, content_for_sign, entry_count, placement_content,
    placement_content_by_key,
};
use sidera_signs::{ALL_PLACEMENTS, ALL_SIGNS, Placement, Sign};

#[test]
fn aries_sun_has_title_and_sections() {
    let entry = placement_content(Sign::Aries, Placement::Sun).expect("authored");
    assert_eq!(entry.title, "ARIES");
    assert!(!entry.sections.is_empty());
}

#[test]
fn unknown_keys_resolve_to_absent() {
    assert!(placement_content_by_key("aries", "nonexistent-planet").is_none());
    assert!(placement_content_by_key("ophiuchus", "sun").is_none());
    assert!(placement_content_by_key("", "").is_none());
}

#[test]
fn key_lookup_does_not_normalize() {
    assert!(placement_content_by_key("aries", "sun").is_some());
    assert!(placement_content_by_key("ARIES", "sun").is_none());
    assert!(placement_content_by_key("aries", " sun ").is_none());
}

#[test]
fn every_combination_is_authored() {
    assert_eq!(entry_count(), 144);
    for sign in ALL_SIGNS {
        for placement in ALL_PLACEMENTS {
            let entry = placement_content(sign, placement)
                .unwrap_or_else(|| panic!("missing {}-{}", sign.key(), placement.key()));
            assert_eq!(entry.sign, sign);
            assert_eq!(entry.placement, placement);
            assert_eq!(entry.title, sign.title());
            assert!(entry.sections.len() >= 1);
        }
    }
}

#[test]
fn every_entry_carries_trait_lists() {
    for sign in ALL_SIGNS {
        for placement in ALL_PLACEMENTS {
            let entry = placement_content(sign, placement).unwrap();
            assert!(!entry.traits.is_empty());
            assert!(!entry.strengths.is_empty());
            assert!(!entry.challenges.is_empty());
            assert!(entry.subtitle.is_some());
        }
    }
}

#[test]
fn placement_filter_preserves_table_order() {
    for placement in ALL_PLACEMENTS {
        let entries = content_for_placement(placement);
        assert_eq!(entries.len(), 12);
        for (entry, sign) in entries.iter().zip(ALL_SIGNS) {
            assert_eq!(entry.sign, sign);
        }
    }
}

#[test]
fn sign_filter_preserves_table_order() {
    for sign in ALL_SIGNS {
        let entries = content_for_sign(sign);
        assert_eq!(entries.len(), 12);
        for (entry, placement) in entries.iter().zip(ALL_PLACEMENTS) {
            assert_eq!(entry.placement, placement);
        }
    }
}

#[test]
fn entries_serialize_to_json() {
    let entry = placement_content(Sign::Leo, Placement::Venus).unwrap();
    let json = serde_json::to_value(entry).unwrap();
    assert_eq!(json["sign"], "leo");
    assert_eq!(json["placement"], "venus");
    assert_eq!(json["title"], "LEO");
    assert!(json["sections"].as_array().unwrap().len() >= 1);
}
