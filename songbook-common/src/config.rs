//! Configuration loading and resolution
//!
//! Resolution priority, highest first:
//! 1. Command-line argument or environment variable (collected by the binary)
//! 2. TOML config file
//! 3. Compiled default

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Default storage connection string
pub const DEFAULT_DATABASE_URL: &str = "sqlite://songbook.db?mode=rwc";

/// Default HTTP listen address
pub const DEFAULT_LISTEN_ADDRESS: &str = "127.0.0.1:8080";

/// Default base URL of the song-info lookup service.
///
/// Points at this service's own `/info` endpoint.
pub const DEFAULT_DETAIL_URL: &str = "http://localhost:8080";

/// Default timeout for one song-info lookup
pub const DEFAULT_DETAIL_TIMEOUT_SECS: u64 = 30;

/// Optional settings read from a TOML config file
///
/// Every key may be omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub database_url: Option<String>,
    pub listen_address: Option<String>,
    pub detail_url: Option<String>,
    pub detail_timeout_secs: Option<u64>,
}

/// Values supplied on the command line or through the environment
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub database_url: Option<String>,
    pub listen_address: Option<String>,
    pub detail_url: Option<String>,
    pub detail_timeout_secs: Option<u64>,
}

/// Fully resolved service configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Storage connection string (sqlx URL)
    pub database_url: String,
    /// Socket address the HTTP server binds to
    pub listen_address: String,
    /// Base URL of the song-info lookup service
    pub detail_url: String,
    /// Timeout applied to each song-info lookup
    pub detail_timeout: Duration,
}

impl ServiceConfig {
    /// Merge overrides, file values and compiled defaults, then validate
    pub fn resolve(overrides: ConfigOverrides, file: Option<TomlConfig>) -> Result<Self> {
        let file = file.unwrap_or_default();

        let config = Self {
            database_url: overrides
                .database_url
                .or(file.database_url)
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            listen_address: overrides
                .listen_address
                .or(file.listen_address)
                .unwrap_or_else(|| DEFAULT_LISTEN_ADDRESS.to_string()),
            detail_url: overrides
                .detail_url
                .or(file.detail_url)
                .unwrap_or_else(|| DEFAULT_DETAIL_URL.to_string()),
            detail_timeout: Duration::from_secs(
                overrides
                    .detail_timeout_secs
                    .or(file.detail_timeout_secs)
                    .unwrap_or(DEFAULT_DETAIL_TIMEOUT_SECS),
            ),
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.database_url.trim().is_empty() {
            return Err(Error::Config("database_url must not be empty".to_string()));
        }
        if self.listen_address.trim().is_empty() {
            return Err(Error::Config("listen_address must not be empty".to_string()));
        }
        if self.detail_url.trim().is_empty() {
            return Err(Error::Config("detail_url must not be empty".to_string()));
        }
        if self.detail_timeout.is_zero() {
            return Err(Error::Config(
                "detail_timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Read and parse a TOML config file
pub fn load_toml_config(path: &Path) -> Result<TomlConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::Config(format!("Read config file {} failed: {}", path.display(), e))
    })?;

    toml::from_str(&content)
        .map_err(|e| Error::Config(format!("Parse config file {} failed: {}", path.display(), e)))
}
