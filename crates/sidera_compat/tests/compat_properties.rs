//! Property tests over the full compatibility table.

use pretty_assertions::assert_eq;
use sidera_compat::{compatibility, compatibility_for_all};
use sidera_signs::ALL_SIGNS;

#[test]
fn every_ordered_pair_resolves_with_authored_content() {
    for user in ALL_SIGNS {
        for other in ALL_SIGNS {
            let record = compatibility(user.key(), other.key());
            assert!(
                !record.heading.is_empty(),
                "empty heading for {}-{}",
                user.key(),
                other.key()
            );
            assert!(
                !record.description.is_empty(),
                "empty description for {}-{}",
                user.key(),
                other.key()
            );
            assert!(
                record.score.is_some(),
                "missing score for {}-{}",
                user.key(),
                other.key()
            );
            assert_eq!(record.user_sign, user.key());
            assert_eq!(record.other_sign, other.key());
        }
    }
}

#[test]
fn scores_stay_in_declared_range() {
    for user in ALL_SIGNS {
        for other in ALL_SIGNS {
            let record = compatibility(user.key(), other.key());
            let score = record.score.unwrap();
            assert!((1..=10).contains(&score));
        }
    }
}

#[test]
fn case_and_whitespace_do_not_change_the_record() {
    let plain = compatibility("aries", "libra");
    assert_eq!(compatibility("Aries", " LIBRA "), plain);
    assert_eq!(compatibility("ARIES", "Libra"), plain);
}

#[test]
fn reversal_is_not_guaranteed_symmetric() {
    let forward = compatibility("aries", "libra");
    let reverse = compatibility("libra", "aries");
    assert_ne!(forward.heading, reverse.heading);
    assert_ne!(forward.description, reverse.description);
}

#[test]
fn untabulated_pair_synthesizes_placeholder() {
    let record = compatibility("ophiuchus", "aries");
    assert_eq!(record.heading, "Ophiuchus + Aries");
    assert_eq!(record.score, None);

    let record = compatibility("aries", "ophiuchus");
    assert_eq!(record.heading, "Aries + Ophiuchus");
    assert_eq!(record.score, None);
}

#[test]
fn all_for_sign_returns_twelve_in_canonical_order() {
    let records = compatibility_for_all("leo");
    assert_eq!(records.len(), 12);

    let expected = [
        "aries",
        "taurus",
        "gemini",
        "cancer",
        "leo",
        "virgo",
        "libra",
        "scorpio",
        "sagittarius",
        "capricorn",
        "aquarius",
        "pisces",
    ];
    for (record, other) in records.iter().zip(expected) {
        assert_eq!(record.user_sign, "leo");
        assert_eq!(record.other_sign, other);
        assert!(record.score.is_some());
    }
}

#[test]
fn all_for_unknown_sign_still_returns_twelve_fallbacks() {
    let records = compatibility_for_all("ophiuchus");
    assert_eq!(records.len(), 12);
    for record in &records {
        assert_eq!(record.user_sign, "ophiuchus");
        assert_eq!(record.score, None);
        assert!(!record.heading.is_empty());
    }
}

#[test]
fn self_pairs_are_authored() {
    for sign in ALL_SIGNS {
        let record = compatibility(sign.key(), sign.key());
        assert!(record.score.is_some(), "self pair {} not authored", sign.key());
    }
}
