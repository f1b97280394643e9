//! TOML configuration for the `custody` binary.

use std::path::Path;
use std::time::Duration;

use custody_types::Network;
use custody_utils::LogFormat;
use custody_wallet::{RegistryConfig, DEFAULT_ADHOC_LOOKAHEAD};
use custody_work::DEFAULT_WORK_TIMEOUT;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustodyConfig {
    /// Address prefix for created accounts.
    #[serde(default)]
    pub network: Network,

    /// Work peer URLs raced for every proof-of-work request.
    #[serde(default)]
    pub work_peers: Vec<String>,

    #[serde(default = "default_work_timeout_secs")]
    pub work_timeout_secs: u64,

    /// Check peer results locally before accepting them.
    #[serde(default)]
    pub verify_work: bool,

    /// Longest wait for a wallet lock. Absent means wait forever.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lock_timeout_ms: Option<u64>,

    #[serde(default = "default_adhoc_lookahead")]
    pub adhoc_lookahead: u32,

    #[serde(default)]
    pub log_format: LogFormat,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_work_timeout_secs() -> u64 {
    DEFAULT_WORK_TIMEOUT.as_secs()
}

fn default_adhoc_lookahead() -> u32 {
    DEFAULT_ADHOC_LOOKAHEAD
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Command-line values that take precedence over the file.
#[derive(Debug, Default)]
pub struct Overrides {
    pub network: Option<Network>,
    pub work_peers: Vec<String>,
    pub log_format: Option<LogFormat>,
    pub log_level: Option<String>,
}

impl CustodyConfig {
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(network) = overrides.network {
            self.network = network;
        }
        if !overrides.work_peers.is_empty() {
            self.work_peers = overrides.work_peers;
        }
        if let Some(format) = overrides.log_format {
            self.log_format = format;
        }
        if let Some(level) = overrides.log_level {
            self.log_level = level;
        }
        self
    }

    pub fn registry_config(&self) -> RegistryConfig {
        RegistryConfig {
            network: self.network,
            lock_timeout: self.lock_timeout_ms.map(Duration::from_millis),
            adhoc_lookahead: self.adhoc_lookahead,
        }
    }

    pub fn work_timeout(&self) -> Duration {
        Duration::from_secs(self.work_timeout_secs)
    }
}

impl Default for CustodyConfig {
    fn default() -> Self {
        Self {
            network: Network::default(),
            work_peers: Vec::new(),
            work_timeout_secs: default_work_timeout_secs(),
            verify_work: false,
            lock_timeout_ms: None,
            adhoc_lookahead: default_adhoc_lookahead(),
            log_format: LogFormat::default(),
            log_level: default_log_level(),
        }
    }
}
