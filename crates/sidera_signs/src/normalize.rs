//! Shared key-normalization helpers.
//!
//! Lookup keys join the normalized sign (and, for content, the placement)
//! with a literal `-`. Both vocabularies are fixed and disjoint, so the
//! joined keys cannot collide.

/// Normalize a user-supplied identifier: trim whitespace, lowercase.
///
/// No membership check is performed — unrecognized identifiers pass through
/// and flow into the resolvers' fallback / absence branches.
pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Build an ordered pair key: `"{a}-{b}"`. Order matters; reversed
/// arguments address a different table entry.
pub fn pair_key(a: &str, b: &str) -> String {
    format!("{a}-{b}")
}

/// Capitalize a normalized identifier for display: first character
/// uppercased, remainder left as-is (already lowercase after [`normalize`]).
pub fn capitalize(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize(" LIBRA "), "libra");
        assert_eq!(normalize("Aries"), "aries");
        assert_eq!(normalize("pisces"), "pisces");
    }

    #[test]
    fn normalize_empty() {
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn pair_key_joins_in_order() {
        assert_eq!(pair_key("aries", "libra"), "aries-libra");
        assert_eq!(pair_key("libra", "aries"), "libra-aries");
    }

    #[test]
    fn capitalize_first_char() {
        assert_eq!(capitalize("aries"), "Aries");
        assert_eq!(capitalize("ophiuchus"), "Ophiuchus");
    }

    #[test]
    fn capitalize_empty() {
        assert_eq!(capitalize(""), "");
    }
}
