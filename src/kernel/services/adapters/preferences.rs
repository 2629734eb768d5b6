//! Preference persistence and change broadcast.
//!
//! Every write goes to the store under the versioned key first; only a
//! successful write is broadcast, as exactly one notification.

use serde_json::Value;

use crate::kernel::error::Result;
use crate::kernel::preferences::{PreferenceKey, Preferences};
use crate::kernel::services::bus::{Broadcaster, Notification};
use crate::kernel::services::ports::{KeyValueStore, StoreError};

pub struct PreferenceService<S> {
    store: S,
    bus: Broadcaster,
}

impl<S: KeyValueStore> PreferenceService<S> {
    pub fn new(store: S, bus: Broadcaster) -> Self {
        Self { store, bus }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Stored value, or the key's default when absent. A stored value of the
    /// wrong type reads as the default.
    pub fn get(&self, key: PreferenceKey) -> std::result::Result<Value, StoreError> {
        match self.store.get(&key.storage_key())? {
            Some(value) if Preferences::validate(key, &value).is_ok() => Ok(value),
            Some(value) => {
                tracing::warn!(%key, %value, "ignoring stored preference of wrong type");
                Ok(key.default_value())
            }
            None => Ok(key.default_value()),
        }
    }

    pub fn load_all(&self) -> std::result::Result<Preferences, StoreError> {
        let mut preferences = Preferences::default();
        for key in PreferenceKey::ALL {
            let value = self.get(key)?;
            // get() only returns values that validate
            let _ = preferences.apply(key, &value);
        }
        Ok(preferences)
    }

    pub fn set(&mut self, key: PreferenceKey, value: Value) -> Result<()> {
        Preferences::validate(key, &value)?;
        self.store.set(&key.storage_key(), value.clone())?;
        tracing::debug!(%key, %value, "preference set");
        self.bus
            .broadcast(Notification::PreferenceChanged { key, value });
        Ok(())
    }

    /// Clears the store, then broadcasts every default one key at a time.
    /// Fails only when the store cannot be cleared; nothing is broadcast then.
    pub fn reset_all(&mut self) -> Result<()> {
        self.store.delete_all()?;
        tracing::info!("preferences reset to defaults");
        for key in PreferenceKey::ALL {
            self.bus.broadcast(Notification::PreferenceChanged {
                key,
                value: key.default_value(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/preferences.rs"]
mod tests;
