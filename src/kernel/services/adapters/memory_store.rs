//! In-memory key-value store.
//!
//! Clones share the same entries, so a host can hand one clone to a session
//! and keep another to inspect what was persisted. `set_available(false)`
//! makes every call fail with [`StoreError::Unavailable`].

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use rustc_hash::FxHashMap;
use serde_json::Value;

use crate::kernel::services::ports::{KeyValueStore, StoreError};

#[derive(Default)]
struct MemoryInner {
    entries: FxHashMap<String, Value>,
    unavailable: bool,
    writes: usize,
}

#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<MemoryInner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_available(&self, available: bool) {
        self.lock().unavailable = !available;
    }

    /// Number of successful `set`/`delete_all` calls so far.
    pub fn writes(&self) -> usize {
        self.lock().writes
    }

    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().entries.is_empty()
    }

    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.lock().entries.keys().cloned().collect();
        keys.sort();
        keys
    }

    fn lock(&self) -> MutexGuard<'_, MemoryInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn check(inner: &MemoryInner) -> Result<(), StoreError> {
        if inner.unavailable {
            return Err(StoreError::Unavailable("memory store switched off".into()));
        }
        Ok(())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        let inner = self.lock();
        Self::check(&inner)?;
        Ok(inner.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: Value) -> Result<(), StoreError> {
        let mut inner = self.lock();
        Self::check(&inner)?;
        inner.entries.insert(key.to_string(), value);
        inner.writes += 1;
        Ok(())
    }

    fn delete_all(&mut self) -> Result<(), StoreError> {
        let mut inner = self.lock();
        Self::check(&inner)?;
        inner.entries.clear();
        inner.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/memory_store.rs"]
mod tests;
