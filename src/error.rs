//! Error types for aptledger

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for aptledger
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Not an aptledger directory: {0}")]
    NotLedgerDirectory(PathBuf),

    #[error("Storage quota exceeded writing '{key}': {needed} bytes needed, quota is {quota}")]
    QuotaExceeded {
        key: String,
        needed: usize,
        quota: usize,
    },

    #[error("Corrupt store file {path}: {reason}")]
    CorruptStore { path: PathBuf, reason: String },

    #[error("Write rejected for key '{0}'")]
    WriteRejected(String),

    #[error("Invalid month: {0}")]
    InvalidMonth(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Unknown content kind: {0}")]
    UnknownContentKind(String),

    #[error("Unknown record family: {0}")]
    UnknownFamily(String),

    #[error("Record family '{0}' needs a building id")]
    MissingTenant(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl LedgerError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            LedgerError::NotLedgerDirectory(_) => 2,
            LedgerError::InvalidMonth(_)
            | LedgerError::InvalidAmount(_)
            | LedgerError::UnknownContentKind(_)
            | LedgerError::UnknownFamily(_)
            | LedgerError::MissingTenant(_) => 3,
            LedgerError::QuotaExceeded { .. } | LedgerError::WriteRejected(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            LedgerError::NotLedgerDirectory(path) => {
                format!(
                    "Not an aptledger directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'aptledger init' in this directory to create a new ledger\n\
                    • Navigate to an existing ledger directory\n\
                    • Set APTLEDGER_ROOT environment variable to your ledger path",
                    path.display()
                )
            }
            LedgerError::QuotaExceeded { quota, .. } => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Raise the quota: aptledger config quota_bytes {}",
                    self,
                    quota.saturating_mul(2)
                )
            }
            LedgerError::WriteRejected(key) => {
                format!(
                    "Write rejected for key '{}'\n\n\
                    Suggestions:\n\
                    • Re-run with APTLEDGER_LOG=warn to see the underlying cause\n\
                    • Check free space and the configured quota_bytes",
                    key
                )
            }
            LedgerError::InvalidMonth(value) => {
                format!(
                    "Invalid month: '{}'\n\n\
                    Expected format: YYYY-MM\n\
                    Example: aptledger dues b1 --start 2025-01",
                    value
                )
            }
            LedgerError::UnknownContentKind(kind) => {
                format!(
                    "Unknown content kind: '{}'\n\n\
                    Valid kinds: board, forum",
                    kind
                )
            }
            LedgerError::UnknownFamily(family) => {
                format!(
                    "Unknown record family: '{}'\n\n\
                    Valid families: finance, firms, board, forum, buildings, users",
                    family
                )
            }
            LedgerError::MissingTenant(family) => {
                format!(
                    "{}\n\n\
                    Example: aptledger show {} b1",
                    self, family
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using LedgerError
pub type Result<T> = std::result::Result<T, LedgerError>;
