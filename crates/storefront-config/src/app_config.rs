//! Application configuration
//!
//! Configuration loaded from `.storefront-cache.toml`. The cache itself only
//! records when a collection was last fetched; deciding when that is too old
//! happens here.

use anyhow::{Context, Result};
use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration loaded from .storefront-cache.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Default log filter when RUST_LOG is not set (e.g., "info", "debug")
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Seconds after which a fetched collection counts as stale
    #[serde(default = "default_stale_after_secs")]
    pub stale_after_secs: u64,

    /// Action log to replay when none is passed on the command line
    #[serde(default)]
    pub default_replay_file: Option<PathBuf>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_stale_after_secs() -> u64 {
    300 // Five minutes
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            stale_after_secs: default_stale_after_secs(),
            default_replay_file: None,
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        if let Some(content) = crate::load_config_file() {
            match Self::parse(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("{:#}", e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }

    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config file")
    }

    pub fn stale_after(&self) -> TimeDelta {
        i64::try_from(self.stale_after_secs)
            .ok()
            .and_then(TimeDelta::try_seconds)
            .unwrap_or(TimeDelta::MAX)
    }

    /// Whether data fetched at `last_fetched` should be refetched at `now`
    ///
    /// Never fetched counts as stale.
    pub fn is_stale(&self, last_fetched: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
        match last_fetched {
            Some(fetched) => now.signed_duration_since(fetched) >= self.stale_after(),
            None => true,
        }
    }
}
