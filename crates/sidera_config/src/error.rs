//! Configuration errors.

use thiserror::Error;

/// Errors from configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Extraction from the layered providers failed.
    #[error("config extraction failed: {0}")]
    Extraction(#[from] Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        Self::Extraction(Box::new(e))
    }
}
