//! Generic load/save over a [`Backend`]
//!
//! Nothing here returns an error to the caller. Reads fall back to the
//! caller's default and writes report a plain success flag; every swallowed
//! failure is logged at `warn`.

use crate::error::{LedgerError, Result};
use crate::infrastructure::backend::Backend;
use crate::infrastructure::finite;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

/// What a raw read found under a key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot {
    /// Nothing was ever written
    Empty,
    Filled(String),
    /// The backend itself failed; the key may or may not hold data
    Unreadable,
}

/// JSON store wrapping a backend
#[derive(Debug)]
pub struct Store<B: Backend> {
    backend: B,
}

impl<B: Backend> Store<B> {
    pub fn new(backend: B) -> Self {
        Store { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Raw read that never fails
    pub fn fetch(&self, key: &str) -> Slot {
        match self.backend.get(key) {
            Ok(Some(raw)) => Slot::Filled(raw),
            Ok(None) => Slot::Empty,
            Err(e) => {
                warn!(key, error = %e, "backend read failed");
                Slot::Unreadable
            }
        }
    }

    /// Raw write that reports failure as `false`
    pub fn put(&self, key: &str, raw: &str) -> bool {
        match self.backend.set(key, raw) {
            Ok(()) => true,
            Err(e) => {
                warn!(key, error = %e, "backend write failed");
                false
            }
        }
    }

    /// Load the value stored under `key`.
    ///
    /// * nothing stored, `seed` given: the seed is written and returned
    /// * nothing stored, no seed: `default` is returned and nothing is written
    /// * stored but unparsable, or JSON `null`: `default`
    /// * stored and parsable: the stored value as is
    ///
    /// Note that this is a read that may write. Callers rely on the seed
    /// path to initialize a record on first access.
    pub fn load<T>(&self, key: &str, default: T, seed: Option<T>) -> T
    where
        T: Serialize + DeserializeOwned,
    {
        match self.fetch(key) {
            Slot::Empty => match seed {
                Some(seed) => {
                    debug!(key, "seeding record on first access");
                    // The seed is returned even if persisting it fails
                    let _ = self.save(key, &seed);
                    seed
                }
                None => default,
            },
            Slot::Unreadable => default,
            Slot::Filled(raw) => match decode(&raw) {
                Ok(Some(value)) => value,
                Ok(None) => default,
                Err(e) => {
                    warn!(key, error = %e, "discarding unreadable record");
                    default
                }
            },
        }
    }

    /// Serialize and write `value`, returning whether it was stored
    pub fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> bool {
        match self.try_save(key, value) {
            Ok(()) => true,
            Err(e) => {
                warn!(key, error = %e, "save failed");
                false
            }
        }
    }

    /// Like [`Store::save`] but hands back the failure reason.
    ///
    /// Values holding NaN or an infinity are rejected before anything is
    /// written, since JSON would store them as `null`.
    pub fn try_save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        finite::check(value)
            .map_err(|e| LedgerError::InvalidAmount(format!("{} (key '{}')", e, key)))?;
        let raw = serde_json::to_string(value)?;
        self.backend.set(key, &raw)
    }
}

/// `Ok(None)` for a stored JSON `null`
fn decode<T: DeserializeOwned>(raw: &str) -> Result<Option<T>> {
    let value: Value = serde_json::from_str(raw)?;
    if value.is_null() {
        return Ok(None);
    }
    serde_json::from_value(value)
        .map(Some)
        .map_err(LedgerError::Json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::backend::MemoryBackend;
    use serde::Deserialize;
    use serde_json::json;
    use std::collections::BTreeMap;

    /// Backend whose every operation fails
    struct BrokenBackend;

    impl Backend for BrokenBackend {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Err(LedgerError::Io(std::io::Error::other("disk gone")))
        }

        fn set(&self, _key: &str, _value: &str) -> Result<()> {
            Err(LedgerError::Io(std::io::Error::other("disk gone")))
        }
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Note {
        title: String,
        stars: u8,
    }

    #[test]
    fn test_load_default_is_not_persisted() {
        let store = Store::new(MemoryBackend::new());

        let value: Vec<String> = store.load("k", vec!["d".to_string()], None);

        assert_eq!(value, vec!["d".to_string()]);
        assert!(store.backend().is_empty());

        // A later read with a different default still sees an empty slot
        let again: Vec<String> = store.load("k", Vec::new(), None);
        assert!(again.is_empty());
    }

    #[test]
    fn test_load_seed_is_persisted() {
        let store = Store::new(MemoryBackend::new());

        let value = store.load("k", json!([]), Some(json!(["seed"])));

        assert_eq!(value, json!(["seed"]));
        assert_eq!(
            store.backend().get("k").unwrap(),
            Some("[\"seed\"]".to_string())
        );
    }

    #[test]
    fn test_load_existing_ignores_default_and_seed() {
        let store = Store::new(MemoryBackend::new());
        store.backend().set("k", "7").unwrap();

        let value: i64 = store.load("k", 0, Some(1));

        assert_eq!(value, 7);
        assert_eq!(store.backend().get("k").unwrap(), Some("7".to_string()));
    }

    #[test]
    fn test_round_trip() {
        let store = Store::new(MemoryBackend::new());
        let note = Note {
            title: "Lift repair".to_string(),
            stars: 4,
        };

        assert!(store.save("note", &note));
        let loaded = store.load(
            "note",
            Note {
                title: String::new(),
                stars: 0,
            },
            None,
        );
        assert_eq!(loaded, note);
    }

    #[test]
    fn test_corrupt_payload_returns_default() {
        let store = Store::new(MemoryBackend::new());
        store.backend().set("k", "{not json").unwrap();

        let value: BTreeMap<String, i64> = store.load("k", BTreeMap::new(), None);
        assert!(value.is_empty());
        // A corrupt payload is not replaced by the seed either
        let seeded: i64 = store.load("k", 3, Some(9));
        assert_eq!(seeded, 3);
        assert_eq!(
            store.backend().get("k").unwrap(),
            Some("{not json".to_string())
        );
    }

    #[test]
    fn test_wrong_shape_returns_default() {
        let store = Store::new(MemoryBackend::new());
        store.backend().set("k", "{\"a\":1}").unwrap();

        let value: Vec<i64> = store.load("k", vec![5], None);
        assert_eq!(value, vec![5]);
    }

    #[test]
    fn test_stored_null_returns_default() {
        let store = Store::new(MemoryBackend::new());
        store.backend().set("k", "null").unwrap();

        let value: Option<i64> = store.load("k", Some(1), None);
        assert_eq!(value, Some(1));
    }

    #[test]
    fn test_save_quota_failure_keeps_prior_value() {
        let store = Store::new(MemoryBackend::with_quota(16));
        assert!(store.save("k", &[1, 2]));

        let too_big = vec![0u32; 64];
        assert!(!store.save("k", &too_big));
        assert!(matches!(
            store.try_save("k", &too_big),
            Err(LedgerError::QuotaExceeded { .. })
        ));

        let value: Vec<u32> = store.load("k", Vec::new(), None);
        assert_eq!(value, vec![1, 2]);
    }

    #[test]
    fn test_save_rejects_non_finite_and_keeps_prior_value() {
        let store = Store::new(MemoryBackend::new());
        assert!(store.save("k", &vec![10.0, 20.0]));

        assert!(!store.save("k", &vec![10.0, f64::INFINITY]));
        assert!(matches!(
            store.try_save("k", &vec![f64::NAN]),
            Err(LedgerError::InvalidAmount(_))
        ));

        let value: Vec<f64> = store.load("k", Vec::new(), None);
        assert_eq!(value, vec![10.0, 20.0]);
    }

    #[test]
    fn test_save_failure_on_absent_key_leaves_it_absent() {
        let store = Store::new(MemoryBackend::with_quota(4));
        assert!(!store.save("key", &"a long string value"));
        assert!(!store.backend().has("key").unwrap());
    }

    #[test]
    fn test_broken_backend_never_panics() {
        let store = Store::new(BrokenBackend);

        assert_eq!(store.fetch("k"), Slot::Unreadable);
        assert!(!store.put("k", "v"));
        assert!(!store.save("k", &1));
        // Unreadable is not treated as empty, so the seed is not returned
        let value: i64 = store.load("k", 0, Some(5));
        assert_eq!(value, 0);
    }

    #[test]
    fn test_seed_returned_even_if_write_fails() {
        let store = Store::new(MemoryBackend::with_quota(2));
        let value = store.load("key", json!(null), Some(json!("seed")));
        assert_eq!(value, json!("seed"));
        assert!(store.backend().is_empty());
    }
}
