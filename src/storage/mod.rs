//! Snapshot store abstraction - the local-storage analogue.
//!
//! A [`SnapshotStore`] is a synchronous string key-value store holding one
//! JSON-encoded snapshot per key. Writes are best-effort and not
//! transactional: a crash between an in-memory mutation and its snapshot
//! write loses the most recent change. Two implementations are provided:
//! [`MemoryStore`] for tests and ephemeral sessions, and [`FileStore`]
//! persisting one JSON file per key under a directory.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::errors::Result;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Synchronous keyed snapshot storage.
pub trait SnapshotStore: Send + Sync {
    /// Returns the raw snapshot stored under `key`, or `None` if absent.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous snapshot.
    fn write(&self, key: &str, value: &str) -> Result<()>;

    /// Removes the snapshot under `key`. Removing an absent key is a no-op.
    fn remove(&self, key: &str) -> Result<()>;
}

/// Reads and decodes the JSON snapshot under `key`, or `None` if absent.
pub fn load_snapshot<T: DeserializeOwned>(
    store: &dyn SnapshotStore,
    key: &str,
) -> Result<Option<T>> {
    match store.read(key)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Encodes `value` as JSON and stores it under `key`.
pub fn save_snapshot<T: Serialize + ?Sized>(
    store: &dyn SnapshotStore,
    key: &str,
    value: &T,
) -> Result<()> {
    let raw = serde_json::to_string(value)?;
    store.write(key, &raw)
}

/// Builders for the per-user snapshot keys.
pub mod keys {
    /// Global key holding the current [`crate::entities::User`] record.
    pub const USER: &str = "user";

    /// Key of a user's pet roster snapshot.
    #[must_use]
    pub fn pets(user_id: &str) -> String {
        format!("pets_{user_id}")
    }

    /// Key of a user's appointment book snapshot.
    #[must_use]
    pub fn appointments(user_id: &str) -> String {
        format!("appointments_{user_id}")
    }

    /// Key of a user's subscription snapshot.
    #[must_use]
    pub fn subscription(user_id: &str) -> String {
        format!("subscription_{user_id}")
    }
}
