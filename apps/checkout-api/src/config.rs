//! # API Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     CHECKOUT_HTTP_ADDR=127.0.0.1:8080                                  │
//! │                                                                         │
//! │  2. TOML Config File (path in CHECKOUT_CONFIG)                         │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     0.0.0.0:3000, reference catalog                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [server]
//! addr = "0.0.0.0:3000"
//!
//! [[catalog]]
//! name = "Apples"
//! cost = 60
//! discount = "buy_one_get_one_free"
//!
//! [[catalog]]
//! name = "Oranges"
//! cost = 25
//! discount = "three_for_two"
//! ```
//!
//! When no `[[catalog]]` entry is given the reference catalog is used.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use checkout_core::{Catalog, CatalogEntry, ValidationError};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Environment variable naming the TOML config file.
pub const CONFIG_PATH_ENV: &str = "CHECKOUT_CONFIG";

/// Environment variable overriding the listen address.
pub const HTTP_ADDR_ENV: &str = "CHECKOUT_HTTP_ADDR";

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Listen address.
    #[serde(default = "default_addr")]
    pub addr: String,
}

fn default_addr() -> String {
    "0.0.0.0:3000".to_string()
}

impl Default for ServerSettings {
    fn default() -> Self {
        ServerSettings {
            addr: default_addr(),
        }
    }
}

/// Full API configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default)]
    pub server: ServerSettings,

    /// Catalog entries; empty means the reference catalog.
    #[serde(default)]
    pub catalog: Vec<CatalogEntry>,
}

impl ApiConfig {
    /// Loads configuration: defaults, then the file in `CHECKOUT_CONFIG`,
    /// then environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var(CONFIG_PATH_ENV).ok().map(PathBuf::from);
        let mut config = match path {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a TOML config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        info!(path = %path.display(), "Loading config file");
        Self::from_toml(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(addr) = std::env::var(HTTP_ADDR_ENV) {
            debug!(addr = %addr, "Overriding listen address from environment");
            self.server.addr = addr;
        }
    }

    /// Validates the address and catalog entries.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.socket_addr()?;
        self.build_catalog()?;
        Ok(())
    }

    /// Parsed listen address.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.server
            .addr
            .parse()
            .map_err(|_| ConfigError::InvalidValue(format!("server.addr '{}'", self.server.addr)))
    }

    /// Builds the catalog described by this configuration.
    pub fn build_catalog(&self) -> Result<Catalog, ConfigError> {
        if self.catalog.is_empty() {
            return Ok(Catalog::with_defaults());
        }
        Ok(Catalog::from_entries(&self.catalog)?)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {reason}")]
    Read { path: String, reason: String },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Invalid catalog: {0}")]
    Catalog(#[from] ValidationError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use checkout_core::{DiscountRule, Money};

    #[test]
    fn test_default_config() {
        let config = ApiConfig::default();
        assert_eq!(config.server.addr, "0.0.0.0:3000");
        assert!(config.validate().is_ok());

        let catalog = config.build_catalog().unwrap();
        assert_eq!(catalog.lookup_cost("Apples"), Some(Money::from_cents(60)));
    }

    #[test]
    fn test_toml_catalog() {
        let config = ApiConfig::from_toml(
            r#"
            [server]
            addr = "127.0.0.1:8080"

            [[catalog]]
            name = "Pears"
            cost = 40
            discount = "three_for_two"

            [[catalog]]
            name = "Milk"
            cost = 99
            "#,
        )
        .unwrap();

        assert_eq!(config.socket_addr().unwrap().port(), 8080);

        let catalog = config.build_catalog().unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.lookup_cost("Apples"), None);
        assert_eq!(
            catalog.lookup_discount_rule("Pears"),
            Some(DiscountRule::ThreeForTwo)
        );
        assert_eq!(catalog.lookup_discount_rule("Milk"), None);
    }

    #[test]
    fn test_invalid_config() {
        let mut config = ApiConfig::default();
        config.server.addr = ":3000".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::InvalidValue(_))));

        let config = ApiConfig::from_toml("[[catalog]]\nname = \"Pears\"\ncost = -1\n").unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::Catalog(_))));

        assert!(ApiConfig::from_toml("[[catalog]]\nname = \"Pears\"\ndiscount = \"half\"\n").is_err());
    }
}
