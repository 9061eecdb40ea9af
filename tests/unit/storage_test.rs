//! Unit tests for the key-value stores and the failure-absorbing wrapper.

use std::sync::Arc;

use rstest::rstest;
use toolvana::database::Database;
use toolvana::storage::{KeyValueStore, MemoryStorage, SafeStorage, SqliteStorage};
use toolvana::types::errors::StorageError;

fn sqlite_store() -> SqliteStorage {
    SqliteStorage::new(Arc::new(Database::open_in_memory().unwrap()))
}

#[rstest]
#[case::memory(Box::new(MemoryStorage::new()) as Box<dyn KeyValueStore>)]
#[case::sqlite(Box::new(sqlite_store()) as Box<dyn KeyValueStore>)]
fn test_set_get_remove(#[case] mut store: Box<dyn KeyValueStore>) {
    assert_eq!(store.get_item("toolvana_recent").unwrap(), None);

    store.set_item("toolvana_recent", "[]").unwrap();
    assert_eq!(
        store.get_item("toolvana_recent").unwrap().as_deref(),
        Some("[]")
    );

    store.set_item("toolvana_recent", "[\"a\"]").unwrap();
    assert_eq!(
        store.get_item("toolvana_recent").unwrap().as_deref(),
        Some("[\"a\"]")
    );

    store.remove_item("toolvana_recent").unwrap();
    assert_eq!(store.get_item("toolvana_recent").unwrap(), None);

    // absent key
    store.remove_item("toolvana_recent").unwrap();
}

#[test]
fn test_disabled_storage_fails_every_operation() {
    let mut store = MemoryStorage::disabled();
    assert!(matches!(store.get_item("k"), Err(StorageError::Disabled)));
    assert!(matches!(store.set_item("k", "v"), Err(StorageError::Disabled)));
    assert!(matches!(store.remove_item("k"), Err(StorageError::Disabled)));
}

#[test]
fn test_quota_counts_other_keys() {
    let mut store = MemoryStorage::with_quota(16);
    store.set_item("a", "1234567").unwrap();
    let err = store.set_item("b", "12345678").unwrap_err();
    assert!(matches!(
        err,
        StorageError::QuotaExceeded { needed: 9, available: 8, .. }
    ));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_safe_storage_absorbs_failures() {
    let mut safe = SafeStorage::new(MemoryStorage::disabled());
    assert_eq!(safe.read("k"), None);
    assert!(!safe.write("k", "v"));
    assert!(!safe.delete("k"));
}

#[test]
fn test_safe_storage_failed_write_keeps_old_value() {
    let mut safe = SafeStorage::new(MemoryStorage::with_quota(12));
    assert!(safe.write("key", "short"));
    assert!(!safe.write("key", "much too long for the quota"));
    assert_eq!(safe.read("key").as_deref(), Some("short"));
}

#[test]
fn test_sqlite_storage_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kv.db");
    {
        let mut store = SqliteStorage::new(Arc::new(Database::open(&path).unwrap()));
        store.set_item("toolvana_theme_preference", "dark").unwrap();
    }
    let store = SqliteStorage::new(Arc::new(Database::open(&path).unwrap()));
    assert_eq!(
        store
            .get_item("toolvana_theme_preference")
            .unwrap()
            .as_deref(),
        Some("dark")
    );
}
