//! aptledger - Per-building record store
//!
//! Persists dues schedules, opening balances, finance entries, board posts,
//! forum proposals and read-tracking maps in a namespaced key-value store,
//! initializing records on first access.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::LedgerError;
