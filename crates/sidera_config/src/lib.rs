//! Layered configuration loading for Sidera using figment.
//!
//! Sources (highest priority wins):
//! 1. Environment variables (`SIDERA_*` prefix, `__` as section separator)
//! 2. `sidera.toml` in the working directory
//! 3. Built-in defaults
//!
//! Figment maps `SIDERA_SERVER__PORT` to `server.port`,
//! `SIDERA_CONTENT__STRICT_SIGNS` to `content.strict_signs`, and so on.

mod content;
mod error;
mod server;

pub use content::ContentConfig;
pub use error::ConfigError;
pub use server::ServerConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

/// Name of the optional config file in the working directory.
const CONFIG_FILE: &str = "sidera.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SideraConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub content: ContentConfig,
}

impl SideraConfig {
    /// Load configuration from all sources.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Build the provider chain. Public so tests can layer additional
    /// providers on top.
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed("SIDERA_").split("__"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = SideraConfig::default();
        assert_eq!(config.server.port, 7310);
        assert!(!config.content.strict_signs);
    }

    #[test]
    fn figment_extracts_defaults_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config: SideraConfig = SideraConfig::figment().extract().expect("defaults");
            assert_eq!(config.server.bind_addr(), "127.0.0.1:7310");
            assert!(!config.content.strict_signs);
            Ok(())
        });
    }

    #[test]
    fn env_overrides_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("SIDERA_SERVER__PORT", "9000");
            jail.set_env("SIDERA_CONTENT__STRICT_SIGNS", "true");
            let config: SideraConfig = SideraConfig::figment().extract().expect("env layer");
            assert_eq!(config.server.port, 9000);
            assert!(config.content.strict_signs);
            Ok(())
        });
    }

    #[test]
    fn toml_file_overrides_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "sidera.toml",
                r#"
                [server]
                host = "0.0.0.0"
                login_path = "/signin"
                "#,
            )?;
            let config: SideraConfig = SideraConfig::figment().extract().expect("toml layer");
            assert_eq!(config.server.host, "0.0.0.0");
            assert_eq!(config.server.login_path, "/signin");
            assert_eq!(config.server.port, 7310);
            Ok(())
        });
    }
}
