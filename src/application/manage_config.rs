//! Config management use case

use crate::error::{LedgerError, Result};
use crate::infrastructure::{Config, FileSystemRepository, LedgerRepository};

/// Service for managing ledger configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "quota_bytes" => Ok(config.quota_bytes.to_string()),
            "log_level" => Ok(config.log_level),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(LedgerError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: quota_bytes, log_level, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "quota_bytes" => {
                config.quota_bytes = value.trim().parse().map_err(|_| {
                    LedgerError::Config(format!("quota_bytes must be a whole number, got '{}'", value))
                })?;
            }
            "log_level" => {
                config.log_level = value.to_string();
            }
            "created" => {
                return Err(LedgerError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(LedgerError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: quota_bytes, log_level",
                    key
                )));
            }
        }

        self.repository.save_config(&config)
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}
