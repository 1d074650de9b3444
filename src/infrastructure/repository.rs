//! Ledger directory discovery and layout

use crate::error::{LedgerError, Result};
use crate::infrastructure::backend::FileBackend;
use crate::infrastructure::config::{Config, LEDGER_DIR};
use std::fs;
use std::path::{Path, PathBuf};

/// File holding every stored key, inside the ledger directory
pub const STORE_FILE: &str = "store.json";

/// Abstract access to a ledger root
pub trait LedgerRepository {
    /// Get the root directory of this ledger
    fn root(&self) -> &Path;

    /// Load configuration from .aptledger/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .aptledger/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .aptledger directory exists
    fn is_initialized(&self) -> bool;

    /// Create .aptledger directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of LedgerRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover the ledger root.
    /// APTLEDGER_ROOT wins when set, otherwise walk up from the current directory.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("APTLEDGER_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_ledger_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(LedgerError::Config(format!(
                    "APTLEDGER_ROOT is set to '{}' but no .aptledger directory found. \
                    Run 'aptledger init' in that directory or unset APTLEDGER_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the ledger root by walking up from `start`
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_ledger_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(LedgerError::NotLedgerDirectory(start.to_path_buf())),
            }
        }
    }

    fn has_ledger_dir(path: &Path) -> bool {
        path.join(LEDGER_DIR).is_dir()
    }

    pub fn store_path(&self) -> PathBuf {
        self.root.join(LEDGER_DIR).join(STORE_FILE)
    }

    /// File backend for this ledger, honouring the configured quota
    pub fn open_backend(&self, config: &Config) -> FileBackend {
        FileBackend::new(self.store_path(), Some(config.quota_bytes))
    }
}

impl LedgerRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_ledger_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let ledger_dir = self.root.join(LEDGER_DIR);

        if ledger_dir.exists() {
            return Err(LedgerError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&ledger_dir)?;
        Ok(())
    }
}
