//! Initialize ledger use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, LedgerRepository};
use std::fs;
use std::path::Path;

/// Initialize a new ledger at the specified path.
pub fn init(path: &Path, quota_bytes: Option<usize>) -> Result<Config> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());
    repo.initialize()?;

    let mut config = Config::default();
    if let Some(quota) = quota_bytes {
        config.quota_bytes = quota;
    }
    repo.save_config(&config)?;

    tracing::info!(root = %path.display(), quota = config.quota_bytes, "initialized ledger");
    Ok(config)
}
