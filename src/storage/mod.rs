//! Durable key-value storage for Toolvana.
//!
//! [`KeyValueStore`] is the low-level facility (SQLite on disk, or a map in
//! memory). [`SafeStorage`] wraps any store and turns every failure into a
//! logged warning, so callers see "no data" on reads and "no-op" on writes.

pub mod memory;
pub mod safe;
pub mod sqlite;

pub use memory::MemoryStorage;
pub use safe::SafeStorage;
pub use sqlite::SqliteStorage;

use crate::types::errors::StorageError;

/// Flat string-keyed storage with string values.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&mut self, key: &str) -> Result<(), StorageError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        (**self).remove_item(key)
    }
}
