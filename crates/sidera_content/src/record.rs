//! The placement content record.

use serde::Serialize;
use sidera_signs::{Placement, Sign};

/// One titled block of interpretive prose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContentSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<&'static str>,
    pub content: &'static str,
}

/// The authored interpretation for one (sign, placement) combination.
///
/// Entries live in the static table for the life of the process; lookups
/// hand out `&'static` references rather than copies. `title` is the
/// uppercase sign name; the list fields may be empty for sparse entries,
/// in which case they are omitted from serialized output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContentEntry {
    pub sign: Sign,
    pub placement: Placement,
    pub title: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<&'static str>,
    pub sections: &'static [ContentSection],
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    pub traits: &'static [&'static str],
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    pub strengths: &'static [&'static str],
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    pub challenges: &'static [&'static str],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_lowercase_keys() {
        let entry = ContentEntry {
            sign: Sign::Aries,
            placement: Placement::Sun,
            title: "ARIES",
            subtitle: Some("Sun in Aries"),
            sections: &[ContentSection { heading: Some("Core"), content: "text" }],
            traits: &["bold"],
            strengths: &["decisive"],
            challenges: &["impatient"],
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"sign\":\"aries\""));
        assert!(json.contains("\"placement\":\"sun\""));
        assert!(json.contains("\"title\":\"ARIES\""));
    }

    #[test]
    fn empty_lists_are_omitted() {
        let entry = ContentEntry {
            sign: Sign::Leo,
            placement: Placement::Moon,
            title: "LEO",
            subtitle: None,
            sections: &[ContentSection { heading: None, content: "text" }],
            traits: &[],
            strengths: &[],
            challenges: &[],
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert!(!json.contains("subtitle"));
        assert!(!json.contains("traits"));
        assert!(!json.contains("strengths"));
        assert!(!json.contains("challenges"));
    }
}
