//! Key-value backends

use crate::error::{LedgerError, Result};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Synchronous string-keyed storage primitive
pub trait Backend {
    /// Raw value under `key`, `None` when absent
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing anything already there
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Whether anything is stored under `key`
    fn has(&self, key: &str) -> Result<bool> {
        Ok(self.get(key)?.is_some())
    }
}

/// Bytes taken by `entries` once `key` holds `value`
fn usage_after(entries: &BTreeMap<String, String>, key: &str, value: &str) -> usize {
    let others: usize = entries
        .iter()
        .filter(|(k, _)| k.as_str() != key)
        .map(|(k, v)| k.len() + v.len())
        .sum();
    others + key.len() + value.len()
}

fn check_quota(
    entries: &BTreeMap<String, String>,
    key: &str,
    value: &str,
    quota: Option<usize>,
) -> Result<()> {
    if let Some(quota) = quota {
        let needed = usage_after(entries, key, value);
        if needed > quota {
            return Err(LedgerError::QuotaExceeded {
                key: key.to_string(),
                needed,
                quota,
            });
        }
    }
    Ok(())
}

/// In-process backend, used by tests and as a scratch store
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: RefCell<BTreeMap<String, String>>,
    quota: Option<usize>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend that rejects writes once keys plus values exceed `quota` bytes
    pub fn with_quota(quota: usize) -> Self {
        MemoryBackend {
            entries: RefCell::new(BTreeMap::new()),
            quota: Some(quota),
        }
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl Backend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.borrow_mut();
        check_quota(&entries, key, value, self.quota)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn has(&self, key: &str) -> Result<bool> {
        Ok(self.entries.borrow().contains_key(key))
    }
}

/// Backend persisting every key in one JSON object file
#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
    quota: Option<usize>,
}

impl FileBackend {
    pub fn new(path: PathBuf, quota: Option<usize>) -> Self {
        FileBackend { path, quota }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole store; a missing file is an empty store
    fn read_entries(&self) -> Result<BTreeMap<String, String>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(LedgerError::Io(e)),
        };

        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&contents).map_err(|e| LedgerError::CorruptStore {
            path: self.path.clone(),
            reason: e.to_string(),
        })
    }

    /// Write to a temp file next to the store, then rename into place.
    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_name = format!(
            "{}.tmp-{}",
            self.path
                .file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("store.json"),
            std::process::id()
        );
        let tmp_path = self.path.with_file_name(tmp_name);

        fs::write(&tmp_path, serde_json::to_string_pretty(entries)?)?;

        if cfg!(windows) && self.path.exists() {
            fs::remove_file(&self.path)?;
        }

        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

impl Backend for FileBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.read_entries()?;
        check_quota(&entries, key, value, self.quota)?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
    }

    fn has(&self, key: &str) -> Result<bool> {
        Ok(self.read_entries()?.contains_key(key))
    }
}
