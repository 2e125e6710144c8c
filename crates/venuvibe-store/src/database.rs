//! Repository handle.
//!
//! [`Database`] owns a [`KeyValueStore`] backend and a writer lock. Reads go
//! straight to the backend; every read-modify-write of a collection holds the
//! writer lock so that two callers sharing one `Database` cannot interleave
//! and lose each other's records. Separate processes sharing one backing
//! file are not coordinated: the last writer wins.

use std::sync::{Mutex, MutexGuard};

use crate::error::{Result, StoreError};
use crate::kv::{KeyValueStore, MemoryStore};

pub struct Database {
    store: Box<dyn KeyValueStore>,
    writer: Mutex<()>,
}

impl Database {
    /// Wrap an arbitrary store backend.
    pub fn new<S: KeyValueStore + 'static>(store: S) -> Self {
        Self {
            store: Box::new(store),
            writer: Mutex::new(()),
        }
    }

    /// A database backed by a fresh [`MemoryStore`].
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new())
    }

    /// Open (or create) the default on-disk database.
    #[cfg(feature = "sqlite")]
    pub fn open_default() -> Result<Self> {
        Ok(Self::new(crate::sqlite::SqliteStore::open_default()?))
    }

    /// Open (or create) an on-disk database at `path`.
    #[cfg(feature = "sqlite")]
    pub fn open_at(path: &std::path::Path) -> Result<Self> {
        Ok(Self::new(crate::sqlite::SqliteStore::open_at(path)?))
    }

    /// Direct access to the backend, for raw reads.
    ///
    /// Writing through this bypasses the writer lock.
    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    /// Serialize a read-modify-write cycle against other callers.
    pub(crate) fn write_lock(&self) -> Result<MutexGuard<'_, ()>> {
        self.writer.lock().map_err(StoreError::poisoned)
    }
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database").finish_non_exhaustive()
    }
}
