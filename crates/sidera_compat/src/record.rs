//! The compatibility record returned to callers.

use serde::{Deserialize, Serialize};

/// The relationship dynamic between an ordered pair of signs.
///
/// `user_sign` and `other_sign` are the normalized input strings — for
/// fallback records these may be identifiers outside the canonical twelve,
/// which is why they are strings rather than [`sidera_signs::Sign`].
///
/// `score` is `None` exactly when the pair is not tabulated; authored
/// entries always carry a score in 1..=10. The absence is meaningful and
/// must never be flattened to a sentinel number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityRecord {
    pub user_sign: String,
    pub other_sign: String,
    pub heading: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_score_is_omitted_from_json() {
        let record = CompatibilityRecord {
            user_sign: "ophiuchus".to_string(),
            other_sign: "aries".to_string(),
            heading: "Ophiuchus + Aries".to_string(),
            description: "placeholder".to_string(),
            score: None,
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("score"));
    }

    #[test]
    fn present_score_serializes_as_number() {
        let record = CompatibilityRecord {
            user_sign: "aries".to_string(),
            other_sign: "leo".to_string(),
            heading: "h".to_string(),
            description: "d".to_string(),
            score: Some(9),
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"score\":9"));
    }
}
