//! Compatibility resolution over the authored pair table.
//!
//! The resolver is deliberately permissive: inputs are normalized but never
//! validated, so an unrecognized identifier degrades into the placeholder
//! branch instead of failing. The UI must always have something to render.
//! Callers that want rejection instead use [`compatibility_strict`].

use std::collections::HashMap;
use std::sync::LazyLock;

use sidera_signs::{ALL_SIGNS, Sign, SignError, capitalize, normalize};

use crate::record::CompatibilityRecord;
use crate::table::{self, CompatRow};

/// Ordered-pair index over the authored rows, built once on first use.
static INDEX: LazyLock<HashMap<(Sign, Sign), &'static CompatRow>> =
    LazyLock::new(|| table::all_rows().map(|row| ((row.user, row.other), row)).collect());

/// Resolve the compatibility record for an ordered pair of sign names.
///
/// Both inputs are trimmed and lowercased; the pair is order-sensitive, so
/// `compatibility("libra", "aries")` may carry different text than
/// `compatibility("aries", "libra")`. Pairs absent from the table — which
/// includes any unrecognized identifier — receive a synthesized placeholder
/// whose `score` is `None`.
pub fn compatibility(user_sign: &str, other_sign: &str) -> CompatibilityRecord {
    let user_key = normalize(user_sign);
    let other_key = normalize(other_sign);

    let authored = match (Sign::from_key(&user_key), Sign::from_key(&other_key)) {
        (Some(user), Some(other)) => INDEX.get(&(user, other)).copied(),
        _ => None,
    };

    match authored {
        Some(row) => CompatibilityRecord {
            user_sign: user_key,
            other_sign: other_key,
            heading: row.heading.to_string(),
            description: row.description.to_string(),
            score: Some(row.score),
        },
        None => fallback(user_key, other_key),
    }
}

/// Strict variant: rejects inputs that do not name one of the 12 signs.
pub fn compatibility_strict(
    user_sign: &str,
    other_sign: &str,
) -> Result<CompatibilityRecord, SignError> {
    let user = Sign::parse(user_sign)
        .ok_or_else(|| SignError::UnknownSign(user_sign.trim().to_string()))?;
    let other = Sign::parse(other_sign)
        .ok_or_else(|| SignError::UnknownSign(other_sign.trim().to_string()))?;
    Ok(compatibility(user.key(), other.key()))
}

/// Resolve the user sign against all 12 signs in canonical order.
///
/// Always returns exactly 12 records (Aries first, Pisces last); every slot
/// is populated, authored or fallback.
pub fn compatibility_for_all(user_sign: &str) -> Vec<CompatibilityRecord> {
    ALL_SIGNS
        .iter()
        .map(|other| compatibility(user_sign, other.key()))
        .collect()
}

/// Number of authored entries in the table.
pub fn entry_count() -> usize {
    INDEX.len()
}

fn fallback(user_key: String, other_key: String) -> CompatibilityRecord {
    let user_display = capitalize(&user_key);
    let other_display = capitalize(&other_key);
    CompatibilityRecord {
        heading: format!("{user_display} + {other_display}"),
        description: format!(
            "The full compatibility reading for {user_display} and {other_display} \
             is still being prepared. Check back soon for the complete picture of \
             how these two connect."
        ),
        user_sign: user_key,
        other_sign: other_key,
        score: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authored_pair_has_score() {
        let record = compatibility("aries", "leo");
        assert_eq!(record.user_sign, "aries");
        assert_eq!(record.other_sign, "leo");
        assert!(record.score.is_some());
        assert!(!record.heading.is_empty());
        assert!(!record.description.is_empty());
    }

    #[test]
    fn inputs_are_normalized() {
        assert_eq!(compatibility("Aries", " LIBRA "), compatibility("aries", "libra"));
    }

    #[test]
    fn order_addresses_distinct_entries() {
        let forward = compatibility("aries", "libra");
        let reverse = compatibility("libra", "aries");
        assert_ne!(forward.description, reverse.description);
    }

    #[test]
    fn unknown_sign_falls_back() {
        let record = compatibility("ophiuchus", "aries");
        assert_eq!(record.heading, "Ophiuchus + Aries");
        assert_eq!(record.score, None);
        assert!(record.description.contains("Ophiuchus"));
        assert!(record.description.contains("Aries"));
    }

    #[test]
    fn fallback_keeps_normalized_inputs() {
        let record = compatibility(" OPHIUCHUS ", "cetus");
        assert_eq!(record.user_sign, "ophiuchus");
        assert_eq!(record.other_sign, "cetus");
    }

    #[test]
    fn all_for_sign_is_canonical_order() {
        let records = compatibility_for_all("leo");
        assert_eq!(records.len(), 12);
        for (record, sign) in records.iter().zip(ALL_SIGNS) {
            assert_eq!(record.user_sign, "leo");
            assert_eq!(record.other_sign, sign.key());
        }
    }

    #[test]
    fn strict_accepts_lenient_spelling() {
        let record = compatibility_strict(" Leo ", "VIRGO").unwrap();
        assert_eq!(record.user_sign, "leo");
        assert_eq!(record.other_sign, "virgo");
    }

    #[test]
    fn strict_rejects_unknown_sign() {
        let err = compatibility_strict("ophiuchus", "aries").unwrap_err();
        assert_eq!(err, SignError::UnknownSign("ophiuchus".to_string()));
    }

    #[test]
    fn table_is_fully_authored() {
        assert_eq!(entry_count(), 144);
    }
}
