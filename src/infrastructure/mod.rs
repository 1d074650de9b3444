//! Infrastructure layer - Backends, store adapter and configuration

pub mod backend;
pub mod config;
pub mod finite;
pub mod logging;
pub mod repository;
pub mod store;

pub use backend::{Backend, FileBackend, MemoryBackend};
pub use config::Config;
pub use repository::{FileSystemRepository, LedgerRepository};
pub use store::{Slot, Store};
