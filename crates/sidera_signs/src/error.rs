//! Error types for sign and placement parsing.

use thiserror::Error;

/// Errors from the strict parsing paths.
///
/// The default resolvers never raise these — unrecognized identifiers fall
/// back or resolve to an explicit absence. Only the opt-in strict mode and
/// the server/CLI input layers surface them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SignError {
    /// The input does not name one of the 12 zodiac signs.
    #[error("unknown zodiac sign: {0:?}")]
    UnknownSign(String),
    /// The input does not name one of the 12 chart placements.
    #[error("unknown placement: {0:?}")]
    UnknownPlacement(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_input() {
        let err = SignError::UnknownSign("ophiuchus".to_string());
        assert_eq!(err.to_string(), "unknown zodiac sign: \"ophiuchus\"");
    }
}
