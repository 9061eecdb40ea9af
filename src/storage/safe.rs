//! Failure-absorbing wrapper over a [`KeyValueStore`].

use tracing::warn;

use super::KeyValueStore;

/// Wraps a store so that no storage failure ever reaches the caller.
///
/// Reads degrade to `None`, writes and deletes report `false`; every failure is
/// logged as a warning.
pub struct SafeStorage<S: KeyValueStore> {
    inner: S,
}

impl<S: KeyValueStore> SafeStorage<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    pub fn read(&self, key: &str) -> Option<String> {
        match self.inner.get_item(key) {
            Ok(value) => value,
            Err(e) => {
                warn!(key, error = %e, "failed to read from storage");
                None
            }
        }
    }

    pub fn write(&mut self, key: &str, value: &str) -> bool {
        match self.inner.set_item(key, value) {
            Ok(()) => true,
            Err(e) => {
                warn!(key, error = %e, "failed to write to storage");
                false
            }
        }
    }

    pub fn delete(&mut self, key: &str) -> bool {
        match self.inner.remove_item(key) {
            Ok(()) => true,
            Err(e) => {
                warn!(key, error = %e, "failed to remove from storage");
                false
            }
        }
    }

    /// Direct access to the wrapped store, for operations that must see the error.
    pub fn inner(&self) -> &S {
        &self.inner
    }
}
