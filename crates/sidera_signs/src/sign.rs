//! The 12 zodiac signs and their canonical ordering.
//!
//! The canonical order (Aries first, Pisces last) is the order the
//! compatibility resolver enumerates partners in, so it is part of the
//! public contract, not a presentation detail.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SignError;

/// The 12 zodiac signs, Aries through Pisces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 signs in canonical order (0 = Aries, 11 = Pisces).
pub const ALL_SIGNS: [Sign; 12] = [
    Sign::Aries,
    Sign::Taurus,
    Sign::Gemini,
    Sign::Cancer,
    Sign::Leo,
    Sign::Virgo,
    Sign::Libra,
    Sign::Scorpio,
    Sign::Sagittarius,
    Sign::Capricorn,
    Sign::Aquarius,
    Sign::Pisces,
];

impl Sign {
    /// Display name of the sign.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// Canonical lowercase key used in lookup tables and URLs.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Aries => "aries",
            Self::Taurus => "taurus",
            Self::Gemini => "gemini",
            Self::Cancer => "cancer",
            Self::Leo => "leo",
            Self::Virgo => "virgo",
            Self::Libra => "libra",
            Self::Scorpio => "scorpio",
            Self::Sagittarius => "sagittarius",
            Self::Capricorn => "capricorn",
            Self::Aquarius => "aquarius",
            Self::Pisces => "pisces",
        }
    }

    /// Uppercase display title, as used by the placement content records.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Aries => "ARIES",
            Self::Taurus => "TAURUS",
            Self::Gemini => "GEMINI",
            Self::Cancer => "CANCER",
            Self::Leo => "LEO",
            Self::Virgo => "VIRGO",
            Self::Libra => "LIBRA",
            Self::Scorpio => "SCORPIO",
            Self::Sagittarius => "SAGITTARIUS",
            Self::Capricorn => "CAPRICORN",
            Self::Aquarius => "AQUARIUS",
            Self::Pisces => "PISCES",
        }
    }

    /// 0-based index in canonical order (Aries=0 .. Pisces=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Aries => 0,
            Self::Taurus => 1,
            Self::Gemini => 2,
            Self::Cancer => 3,
            Self::Leo => 4,
            Self::Virgo => 5,
            Self::Libra => 6,
            Self::Scorpio => 7,
            Self::Sagittarius => 8,
            Self::Capricorn => 9,
            Self::Aquarius => 10,
            Self::Pisces => 11,
        }
    }

    /// All 12 signs in canonical order.
    pub const fn all() -> &'static [Sign; 12] {
        &ALL_SIGNS
    }

    /// Exact-key lookup: accepts only the canonical lowercase key.
    ///
    /// The placement content resolver uses this — its inputs are assumed
    /// already canonical and are not normalized.
    pub fn from_key(key: &str) -> Option<Sign> {
        ALL_SIGNS.iter().copied().find(|s| s.key() == key)
    }

    /// Lenient parse: trims surrounding whitespace and lowercases before
    /// matching, so `"Aries"` and `" LIBRA "` are accepted.
    pub fn parse(input: &str) -> Option<Sign> {
        Self::from_key(&input.trim().to_ascii_lowercase())
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Sign {
    type Err = SignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| SignError::UnknownSign(s.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_signs_count() {
        assert_eq!(ALL_SIGNS.len(), 12);
    }

    #[test]
    fn sign_indices_sequential() {
        for (i, s) in ALL_SIGNS.iter().enumerate() {
            assert_eq!(s.index() as usize, i);
        }
    }

    #[test]
    fn sign_names_nonempty() {
        for s in ALL_SIGNS {
            assert!(!s.name().is_empty());
            assert!(!s.key().is_empty());
            assert!(!s.title().is_empty());
        }
    }

    #[test]
    fn keys_are_lowercase_names() {
        for s in ALL_SIGNS {
            assert_eq!(s.key(), s.name().to_ascii_lowercase());
        }
    }

    #[test]
    fn titles_are_uppercase_names() {
        for s in ALL_SIGNS {
            assert_eq!(s.title(), s.name().to_ascii_uppercase());
        }
    }

    #[test]
    fn from_key_round_trip() {
        for s in ALL_SIGNS {
            assert_eq!(Sign::from_key(s.key()), Some(s));
        }
    }

    #[test]
    fn from_key_rejects_mixed_case() {
        assert_eq!(Sign::from_key("Aries"), None);
        assert_eq!(Sign::from_key(" aries"), None);
    }

    #[test]
    fn parse_is_case_and_whitespace_insensitive() {
        assert_eq!(Sign::parse("Aries"), Some(Sign::Aries));
        assert_eq!(Sign::parse(" LIBRA "), Some(Sign::Libra));
        assert_eq!(Sign::parse("pisces"), Some(Sign::Pisces));
    }

    #[test]
    fn parse_rejects_unknown() {
        assert_eq!(Sign::parse("ophiuchus"), None);
        assert_eq!(Sign::parse(""), None);
    }

    #[test]
    fn from_str_reports_trimmed_input() {
        let err = " Ophiuchus ".parse::<Sign>().unwrap_err();
        assert_eq!(err, SignError::UnknownSign("Ophiuchus".to_string()));
    }

    #[test]
    fn serde_uses_lowercase_keys() {
        let json = serde_json::to_string(&Sign::Sagittarius).unwrap();
        assert_eq!(json, "\"sagittarius\"");
        let back: Sign = serde_json::from_str("\"leo\"").unwrap();
        assert_eq!(back, Sign::Leo);
    }
}
