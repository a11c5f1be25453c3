//! In-memory snapshot store.
//!
//! Used in tests and for ephemeral sessions where nothing should outlive the
//! process. Interior mutability via a mutex so the store can be shared
//! behind an `Arc` across stores.

use super::SnapshotStore;
use crate::errors::{Error, Result};
use std::collections::HashMap;
use std::sync::Mutex;

/// A [`SnapshotStore`] backed by a `HashMap`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.entries.lock().map_err(|_| Error::Storage {
            message: "memory store mutex poisoned".to_string(),
        })
    }
}

impl SnapshotStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.lock()?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_write_read_remove() {
        let store = MemoryStore::new();

        assert!(store.read("user").unwrap().is_none());

        store.write("user", "{\"id\":\"u1\"}").unwrap();
        assert_eq!(store.read("user").unwrap().unwrap(), "{\"id\":\"u1\"}");

        store.remove("user").unwrap();
        assert!(store.read("user").unwrap().is_none());

        // Removing an absent key is a no-op
        store.remove("user").unwrap();
    }

    #[test]
    fn test_write_replaces_previous_value() {
        let store = MemoryStore::new();
        store.write("k", "old").unwrap();
        store.write("k", "new").unwrap();
        assert_eq!(store.read("k").unwrap().unwrap(), "new");
    }
}
