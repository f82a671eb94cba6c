//! Lookup over the authored placement content table.
//!
//! Unlike the compatibility resolver there is no placeholder synthesis and
//! no input normalization here: absence is reported as `None` and string
//! keys must already be canonical. The asymmetry is deliberate — the
//! compatibility surface must always render, while the content surface is
//! allowed to show "coming soon" at a higher layer.

use std::collections::HashMap;
use std::sync::LazyLock;

use sidera_signs::{Placement, Sign};

use crate::record::ContentEntry;
use crate::table;

/// (sign, placement) index over the authored entries, built once.
static INDEX: LazyLock<HashMap<(Sign, Placement), &'static ContentEntry>> =
    LazyLock::new(|| table::all_entries().map(|e| ((e.sign, e.placement), e)).collect());

/// Authored content for one (sign, placement) combination, if any.
pub fn placement_content(sign: Sign, placement: Placement) -> Option<&'static ContentEntry> {
    INDEX.get(&(sign, placement)).copied()
}

/// String-keyed lookup. Keys are matched exactly against the canonical
/// lowercase vocabulary — no trimming or lowercasing is applied.
pub fn placement_content_by_key(sign: &str, placement: &str) -> Option<&'static ContentEntry> {
    let sign = Sign::from_key(sign)?;
    let placement = Placement::from_key(placement)?;
    placement_content(sign, placement)
}

/// All authored entries for one placement, in the table's authored order.
pub fn content_for_placement(placement: Placement) -> Vec<&'static ContentEntry> {
    table::all_entries().filter(|e| e.placement == placement).collect()
}

/// All authored entries for one sign, in the table's authored order.
pub fn content_for_sign(sign: Sign) -> Vec<&'static ContentEntry> {
    table::all_entries().filter(|e| e.sign == sign).collect()
}

/// Number of authored entries in the table.
pub fn entry_count() -> usize {
    INDEX.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_lookup_finds_authored_entry() {
        let entry = placement_content(Sign::Aries, Placement::Sun).unwrap();
        assert_eq!(entry.title, "ARIES");
        assert!(!entry.sections.is_empty());
    }

    #[test]
    fn key_lookup_is_exact() {
        assert!(placement_content_by_key("aries", "sun").is_some());
        assert!(placement_content_by_key("Aries", "sun").is_none());
        assert!(placement_content_by_key("aries", " sun").is_none());
    }

    #[test]
    fn unknown_placement_is_absent_not_an_error() {
        assert!(placement_content_by_key("aries", "nonexistent-planet").is_none());
        assert!(placement_content_by_key("ophiuchus", "sun").is_none());
    }

    #[test]
    fn per_placement_filter_returns_signs_in_table_order() {
        let entries = content_for_placement(Placement::Moon);
        assert_eq!(entries.len(), 12);
        for (entry, sign) in entries.iter().zip(sidera_signs::ALL_SIGNS) {
            assert_eq!(entry.sign, sign);
            assert_eq!(entry.placement, Placement::Moon);
        }
    }

    #[test]
    fn per_sign_filter_returns_placements_in_table_order() {
        let entries = content_for_sign(Sign::Leo);
        assert_eq!(entries.len(), 12);
        for (entry, placement) in entries.iter().zip(sidera_signs::ALL_PLACEMENTS) {
            assert_eq!(entry.placement, placement);
            assert_eq!(entry.sign, Sign::Leo);
        }
    }

    #[test]
    fn table_is_fully_authored() {
        assert_eq!(entry_count(), 144);
    }
}
