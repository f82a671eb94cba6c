//! Planetary placements: the second axis of the content table.
//!
//! "Placement" covers the luminaries, the rising sign, the eight planets
//! beyond the luminaries, and Chiron — the twelve chart points the content
//! authors write interpretations for.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SignError;

/// The 12 chart placements, in the order the content table is authored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    Sun,
    Moon,
    Rising,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    Chiron,
}

/// All 12 placements in authored order (0 = Sun, 11 = Chiron).
pub const ALL_PLACEMENTS: [Placement; 12] = [
    Placement::Sun,
    Placement::Moon,
    Placement::Rising,
    Placement::Mercury,
    Placement::Venus,
    Placement::Mars,
    Placement::Jupiter,
    Placement::Saturn,
    Placement::Uranus,
    Placement::Neptune,
    Placement::Pluto,
    Placement::Chiron,
];

impl Placement {
    /// Display name of the placement.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Rising => "Rising",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
            Self::Pluto => "Pluto",
            Self::Chiron => "Chiron",
        }
    }

    /// Canonical lowercase key used in lookup tables and URLs.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Sun => "sun",
            Self::Moon => "moon",
            Self::Rising => "rising",
            Self::Mercury => "mercury",
            Self::Venus => "venus",
            Self::Mars => "mars",
            Self::Jupiter => "jupiter",
            Self::Saturn => "saturn",
            Self::Uranus => "uranus",
            Self::Neptune => "neptune",
            Self::Pluto => "pluto",
            Self::Chiron => "chiron",
        }
    }

    /// 0-based index in authored order (Sun=0 .. Chiron=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Sun => 0,
            Self::Moon => 1,
            Self::Rising => 2,
            Self::Mercury => 3,
            Self::Venus => 4,
            Self::Mars => 5,
            Self::Jupiter => 6,
            Self::Saturn => 7,
            Self::Uranus => 8,
            Self::Neptune => 9,
            Self::Pluto => 10,
            Self::Chiron => 11,
        }
    }

    /// All 12 placements in authored order.
    pub const fn all() -> &'static [Placement; 12] {
        &ALL_PLACEMENTS
    }

    /// Exact-key lookup: accepts only the canonical lowercase key.
    pub fn from_key(key: &str) -> Option<Placement> {
        ALL_PLACEMENTS.iter().copied().find(|p| p.key() == key)
    }

    /// Lenient parse: trims and lowercases before matching.
    pub fn parse(input: &str) -> Option<Placement> {
        Self::from_key(&input.trim().to_ascii_lowercase())
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Placement {
    type Err = SignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| SignError::UnknownPlacement(s.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_placements_count() {
        assert_eq!(ALL_PLACEMENTS.len(), 12);
    }

    #[test]
    fn placement_indices_sequential() {
        for (i, p) in ALL_PLACEMENTS.iter().enumerate() {
            assert_eq!(p.index() as usize, i);
        }
    }

    #[test]
    fn placement_names_nonempty() {
        for p in ALL_PLACEMENTS {
            assert!(!p.name().is_empty());
            assert!(!p.key().is_empty());
        }
    }

    #[test]
    fn from_key_round_trip() {
        for p in ALL_PLACEMENTS {
            assert_eq!(Placement::from_key(p.key()), Some(p));
        }
    }

    #[test]
    fn from_key_is_exact() {
        assert_eq!(Placement::from_key("Sun"), None);
        assert_eq!(Placement::from_key("sun "), None);
    }

    #[test]
    fn parse_is_lenient() {
        assert_eq!(Placement::parse(" Rising "), Some(Placement::Rising));
        assert_eq!(Placement::parse("CHIRON"), Some(Placement::Chiron));
    }

    #[test]
    fn parse_rejects_unknown() {
        assert_eq!(Placement::parse("nonexistent-planet"), None);
    }
}
