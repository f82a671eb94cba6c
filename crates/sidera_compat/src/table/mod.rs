//! The authored compatibility table: 144 ordered sign pairs.
//!
//! Each of the 12 files holds one user sign's 12 partner entries, written
//! from that sign's perspective — "aries-libra" and "libra-aries" are
//! distinct entries with independently authored text, and the table makes
//! no symmetry guarantee.

use sidera_signs::Sign;

mod aquarius;
mod aries;
mod cancer;
mod capricorn;
mod gemini;
mod leo;
mod libra;
mod pisces;
mod sagittarius;
mod scorpio;
mod taurus;
mod virgo;

/// One authored table entry. Authored entries always carry a score.
pub(crate) struct CompatRow {
    pub user: Sign,
    pub other: Sign,
    pub heading: &'static str,
    pub description: &'static str,
    pub score: u8,
}

/// All 144 authored rows, grouped by user sign in canonical order.
pub(crate) fn all_rows() -> impl Iterator<Item = &'static CompatRow> {
    aries::ROWS
        .iter()
        .chain(taurus::ROWS.iter())
        .chain(gemini::ROWS.iter())
        .chain(cancer::ROWS.iter())
        .chain(leo::ROWS.iter())
        .chain(virgo::ROWS.iter())
        .chain(libra::ROWS.iter())
        .chain(scorpio::ROWS.iter())
        .chain(sagittarius::ROWS.iter())
        .chain(capricorn::ROWS.iter())
        .chain(aquarius::ROWS.iter())
        .chain(pisces::ROWS.iter())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sidera_signs::ALL_SIGNS;
    use std::collections::HashSet;

    #[test]
    fn table_has_all_144_ordered_pairs() {
        let keys: HashSet<(Sign, Sign)> = all_rows().map(|r| (r.user, r.other)).collect();
        assert_eq!(keys.len(), 144);
        for u in ALL_SIGNS {
            for o in ALL_SIGNS {
                assert!(keys.contains(&(u, o)), "missing {}-{}", u.key(), o.key());
            }
        }
    }

    #[test]
    fn scores_within_range() {
        for row in all_rows() {
            assert!(
                (1..=10).contains(&row.score),
                "{}-{} score {}",
                row.user.key(),
                row.other.key(),
                row.score
            );
        }
    }

    #[test]
    fn text_nonempty() {
        for row in all_rows() {
            assert!(!row.heading.is_empty());
            assert!(!row.description.is_empty());
        }
    }

    #[test]
    fn reversed_pairs_are_independent_text() {
        // Spot-check the non-symmetry contract on a cross-section of pairs.
        let find = |u: Sign, o: Sign| {
            all_rows()
                .find(|r| r.user == u && r.other == o)
                .expect("pair present")
        };
        for (a, b) in [
            (Sign::Aries, Sign::Libra),
            (Sign::Taurus, Sign::Scorpio),
            (Sign::Gemini, Sign::Capricorn),
            (Sign::Cancer, Sign::Leo),
        ] {
            let fwd = find(a, b);
            let rev = find(b, a);
            assert_ne!(fwd.description, rev.description);
        }
    }
}
