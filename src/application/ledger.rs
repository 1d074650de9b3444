//! Entity accessors bound to one store

use crate::domain::records::Building;
use crate::infrastructure::backend::Backend;
use crate::infrastructure::config::Config;
use crate::infrastructure::store::Store;

/// Per-entity load/save pairs over a shared [`Store`].
///
/// The accessors live in sibling modules (`dues`, `balance`, `records`,
/// `read_map`), each adding `impl` blocks to this type.
#[derive(Debug)]
pub struct Ledger<B: Backend> {
    pub(crate) store: Store<B>,
    pub(crate) default_building: Building,
}

impl<B: Backend> Ledger<B> {
    pub fn new(backend: B) -> Self {
        Ledger {
            store: Store::new(backend),
            default_building: Config::default().default_building,
        }
    }

    /// Ledger whose building roster seed comes from `config`
    pub fn from_config(backend: B, config: &Config) -> Self {
        Ledger {
            store: Store::new(backend),
            default_building: config.default_building.clone(),
        }
    }

    pub fn store(&self) -> &Store<B> {
        &self.store
    }
}
