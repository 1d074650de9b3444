//! Configuration management

use crate::domain::records::Building;
use crate::error::{LedgerError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the per-ledger metadata directory
pub const LEDGER_DIR: &str = ".aptledger";

/// Typical browser local-storage budget
pub const DEFAULT_QUOTA_BYTES: usize = 5 * 1024 * 1024;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_quota_bytes")]
    pub quota_bytes: usize,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    pub created: DateTime<Utc>,
    /// Building written to the roster the first time it is read
    #[serde(default = "default_building")]
    pub default_building: Building,
}

fn default_quota_bytes() -> usize {
    DEFAULT_QUOTA_BYTES
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_building() -> Building {
    Building {
        id: "main".to_string(),
        name: "Main Building".to_string(),
        address: String::new(),
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            quota_bytes: default_quota_bytes(),
            log_level: default_log_level(),
            default_building: default_building(),
            created: Utc::now(),
        }
    }
}

impl Config {
    /// Load config from .aptledger/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(LEDGER_DIR).join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                LedgerError::NotLedgerDirectory(path.to_path_buf())
            } else {
                LedgerError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| LedgerError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .aptledger/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let ledger_dir = path.join(LEDGER_DIR);
        let config_path = ledger_dir.join("config.toml");

        if !ledger_dir.exists() {
            fs::create_dir(&ledger_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| LedgerError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Log filter, preferring `APTLEDGER_LOG` over the configured level
    pub fn log_filter(&self) -> String {
        std::env::var("APTLEDGER_LOG").unwrap_or_else(|_| self.log_level.clone())
    }
}
