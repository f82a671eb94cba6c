//! Content resolution options.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ContentConfig {
    /// When set, the HTTP API rejects unrecognized sign names with a 400
    /// instead of serving fallback compatibility records. The library
    /// default stays permissive either way.
    #[serde(default)]
    pub strict_signs: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permissive_by_default() {
        assert!(!ContentConfig::default().strict_signs);
    }
}
