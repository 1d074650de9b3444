//! Application layer - Entity accessors and use cases

pub mod balance;
pub mod dues;
pub mod init;
pub mod ledger;
pub mod manage_config;
pub mod read_map;
pub mod records;

pub use balance::{balance_summary, coerce_balance, BalanceSummary};
pub use dues::DuesChange;
pub use ledger::Ledger;
pub use manage_config::ConfigService;

use crate::error::Result;
use crate::infrastructure::{Config, FileBackend, FileSystemRepository, LedgerRepository};

/// Ledger for an already discovered repository, with its config
pub fn open(repository: &FileSystemRepository) -> Result<(Config, Ledger<FileBackend>)> {
    let config = repository.load_config()?;
    let ledger = Ledger::from_config(repository.open_backend(&config), &config);
    Ok((config, ledger))
}
