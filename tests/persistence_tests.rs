//! Store behaviour against the file backend

use aptledger::application::Ledger;
use aptledger::domain::{keys, ContentKind, Dues, ReadMap};
use aptledger::infrastructure::{Backend, FileBackend, Store};
use serde_json::json;
use tempfile::TempDir;

fn file_store(temp: &TempDir, quota: Option<usize>) -> Store<FileBackend> {
    Store::new(FileBackend::new(temp.path().join("store.json"), quota))
}

#[test]
fn test_default_leaves_file_backend_untouched() {
    let temp = TempDir::new().unwrap();
    let store = file_store(&temp, None);

    let value: Vec<String> = store.load("k", Vec::new(), None);

    assert!(value.is_empty());
    assert!(!temp.path().join("store.json").exists());
}

#[test]
fn test_seed_survives_reopen() {
    let temp = TempDir::new().unwrap();
    let store = file_store(&temp, None);
    store.load("k", json!(null), Some(json!({ "a": 1 })));

    let reopened = file_store(&temp, None);
    assert_eq!(reopened.load("k", json!(null), None), json!({ "a": 1 }));
}

#[test]
fn test_last_write_wins() {
    let temp = TempDir::new().unwrap();
    let store = file_store(&temp, None);

    assert!(store.save("k", &1));
    assert!(store.save("k", &2));
    assert_eq!(store.load("k", 0, None), 2);
}

#[test]
fn test_quota_failure_keeps_prior_value() {
    let temp = TempDir::new().unwrap();
    let store = file_store(&temp, Some(32));

    assert!(store.save("k", &"small"));
    assert!(!store.save("k", &"x".repeat(100)));
    assert_eq!(store.load("k", String::new(), None), "small");
}

#[test]
fn test_writes_under_one_tenant_do_not_affect_another() {
    let temp = TempDir::new().unwrap();
    let ledger = Ledger::new(FileBackend::new(temp.path().join("store.json"), None));

    let mut read = ReadMap::new();
    read.insert("item1".to_string(), json!(123));
    ledger.save_read_map("b1", ContentKind::Board, &read);
    ledger.save_opening_balance("b1", 40.0);
    let mut dues = Dues::new("2025-01");
    dues.monthly_fee = 1.0;
    ledger.save_dues("b1", &dues);

    assert_eq!(ledger.load_read_map("b1", ContentKind::Board), read);
    assert!(ledger.load_read_map("b2", ContentKind::Board).is_empty());
    assert!(ledger.load_read_map("b1", ContentKind::Forum).is_empty());
    assert_eq!(ledger.load_dues_as_of("b2", "2025-01").monthly_fee, 2000.0);
    assert_eq!(ledger.load_opening_balance("b2"), 0.0);
    assert_eq!(ledger.load_opening_balance("b1"), 40.0);
}

#[test]
fn test_corrupt_value_under_key_reads_as_default() {
    let temp = TempDir::new().unwrap();
    let backend = FileBackend::new(temp.path().join("store.json"), None);
    backend
        .set(&keys::read_map(ContentKind::Forum, "b1"), "not json")
        .unwrap();
    let ledger = Ledger::new(backend);

    assert!(ledger.load_read_map("b1", ContentKind::Forum).is_empty());
}
