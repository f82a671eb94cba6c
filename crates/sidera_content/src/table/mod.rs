//! The authored content table: 144 (sign, placement) interpretations.
//!
//! One file per placement, signs in canonical order within each file. The
//! chain below fixes the table's natural iteration order — placement-major,
//! Sun through Chiron — which is the order the filter operations expose.

mod chiron;
mod jupiter;
mod mars;
mod mercury;
mod moon;
mod neptune;
mod pluto;
mod rising;
mod saturn;
mod sun;
mod uranus;
mod venus;

use crate::record::ContentEntry;

/// All authored entries in table order.
pub(crate) fn all_entries() -> impl Iterator<Item = &'static ContentEntry> {
    sun::ENTRIES
        .iter()
        .chain(moon::ENTRIES.iter())
        .chain(rising::ENTRIES.iter())
        .chain(mercury::ENTRIES.iter())
        .chain(venus::ENTRIES.iter())
        .chain(mars::ENTRIES.iter())
        .chain(jupiter::ENTRIES.iter())
        .chain(saturn::ENTRIES.iter())
        .chain(uranus::ENTRIES.iter())
        .chain(neptune::ENTRIES.iter())
        .chain(pluto::ENTRIES.iter())
        .chain(chiron::ENTRIES.iter())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sidera_signs::{ALL_PLACEMENTS, ALL_SIGNS, Placement, Sign};
    use std::collections::HashSet;

    #[test]
    fn table_covers_all_144_combinations() {
        let keys: HashSet<(Sign, Placement)> =
            all_entries().map(|e| (e.sign, e.placement)).collect();
        assert_eq!(keys.len(), 144);
        for sign in ALL_SIGNS {
            for placement in ALL_PLACEMENTS {
                assert!(
                    keys.contains(&(sign, placement)),
                    "missing {}-{}",
                    sign.key(),
                    placement.key()
                );
            }
        }
    }

    #[test]
    fn titles_match_signs() {
        for entry in all_entries() {
            assert_eq!(entry.title, entry.sign.title());
        }
    }

    #[test]
    fn every_entry_has_prose() {
        for entry in all_entries() {
            assert!(!entry.sections.is_empty());
            for section in entry.sections {
                assert!(!section.content.is_empty());
            }
        }
    }

    #[test]
    fn iteration_is_placement_major() {
        let placements: Vec<Placement> = all_entries().map(|e| e.placement).collect();
        let mut expected = Vec::new();
        for placement in ALL_PLACEMENTS {
            expected.extend(std::iter::repeat_n(placement, 12));
        }
        assert_eq!(placements, expected);
    }
}
