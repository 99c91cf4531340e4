//! Key-value persistence used by the content store.
//!
//! The store keeps the whole document as one JSON string under a single key,
//! so backends only need string get/put/remove. Two backends ship with the
//! crate:
//!
//! - [`InMemoryStorage`]: shared `HashMap` for tests and embedding
//! - [`crate::lmdb_storage::LmdbStorage`]: persistent LMDB environment

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use crate::app_response::AppResponse;

/// Per-device key-value storage for serialized content.
pub trait ContentStorage: Send + Sync {
    /// Returns `Ok(None)` when nothing is stored under `key`.
    fn read(&self, key: &str) -> Result<Option<String>, AppResponse>;

    /// Stores `value` under `key`, replacing any previous value.
    fn write(&self, key: &str, value: &str) -> Result<(), AppResponse>;

    /// Removes `key`. Returns `true` if it existed.
    fn remove(&self, key: &str) -> Result<bool, AppResponse>;
}

#[derive(Default)]
struct MemoryInner {
    entries: RwLock<HashMap<String, String>>,
    unavailable: AtomicBool,
    writes: AtomicUsize,
}

/// In-memory storage. Clones share the same entries, so a test can keep a
/// handle while the store owns another.
#[derive(Clone, Default)]
pub struct InMemoryStorage {
    inner: Arc<MemoryInner>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with `value` under `key`.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage
            .inner
            .entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        storage
    }

    /// Simulates a storage that refuses every operation, like a full quota
    /// or a private browsing mode.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.inner.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        self.inner.writes.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.inner
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn check_available(&self) -> Result<(), AppResponse> {
        if self.inner.unavailable.load(Ordering::SeqCst) {
            return Err(AppResponse::DatabaseError("Storage is unavailable".to_string()));
        }
        Ok(())
    }
}

impl ContentStorage for InMemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, AppResponse> {
        self.check_available()?;
        let entries = self.inner.entries.read().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), AppResponse> {
        self.check_available()?;
        let mut entries = self.inner.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_string(), value.to_string());
        self.inner.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<bool, AppResponse> {
        self.check_available()?;
        let mut entries = self.inner.entries.write().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.remove(key).is_some())
    }
}
