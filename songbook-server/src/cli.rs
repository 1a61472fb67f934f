//! Command-line arguments
//!
//! Each option falls back to an environment variable, then to the TOML
//! config file, then to a compiled default.

use clap::Parser;
use songbook_common::config::{load_toml_config, ConfigOverrides, ServiceConfig};
use std::path::PathBuf;

/// Command-line arguments for songbook-server
#[derive(Parser, Debug)]
#[command(name = "songbook-server")]
#[command(about = "Song catalogue REST service")]
#[command(version)]
pub struct Args {
    /// Storage connection string (sqlx SQLite URL)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Address to listen on
    #[arg(short, long, env = "SERVER_ADDRESS")]
    pub listen_address: Option<String>,

    /// Base URL of the song-info lookup service
    #[arg(long, env = "DETAIL_SERVICE_URL")]
    pub detail_url: Option<String>,

    /// Timeout for one song-info lookup, in seconds
    #[arg(long, env = "DETAIL_TIMEOUT_SECS")]
    pub detail_timeout_secs: Option<u64>,

    /// Optional TOML config file
    #[arg(short, long, env = "SONGBOOK_CONFIG")]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            database_url: self.database_url.clone(),
            listen_address: self.listen_address.clone(),
            detail_url: self.detail_url.clone(),
            detail_timeout_secs: self.detail_timeout_secs,
        }
    }

    /// Merge these arguments with the config file (if any) and defaults
    pub fn resolve_config(&self) -> songbook_common::Result<ServiceConfig> {
        let file = self.config.as_deref().map(load_toml_config).transpose()?;
        ServiceConfig::resolve(self.overrides(), file)
    }
}
