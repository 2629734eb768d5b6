//! Workspace list persistence: one JSON array under a fixed key, rewritten
//! wholesale on every structural change.

use crate::kernel::services::ports::{KeyValueStore, StoreError};
use crate::kernel::workspace::Workspace;

pub const WORKSPACE_LIST_KEY: &str = "workspaceList_v2";

pub struct WorkspaceListStore<S> {
    store: S,
}

impl<S: KeyValueStore> WorkspaceListStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// `Ok(None)` when nothing was persisted yet.
    pub fn load(&self) -> Result<Option<Vec<Workspace>>, StoreError> {
        match self.store.get(WORKSPACE_LIST_KEY)? {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }

    pub fn save(&mut self, list: &[Workspace]) -> Result<(), StoreError> {
        let value = serde_json::to_value(list)?;
        self.store.set(WORKSPACE_LIST_KEY, value)?;
        tracing::debug!(workspaces = list.len(), "workspace list persisted");
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/workspaces.rs"]
mod tests;
