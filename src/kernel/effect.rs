use serde_json::Value;

use crate::kernel::preferences::{PreferenceKey, Preferences};
use crate::kernel::services::Notification;
use crate::kernel::workspace::Workspace;

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    PersistWorkspaces(Vec<Workspace>),
    /// `previous` is what the mirror held before; restored if the write fails.
    WritePreference {
        key: PreferenceKey,
        value: Value,
        previous: Value,
    },
    /// Clears the preference store; `previous` is put back if that fails.
    ResetPreferences { previous: Preferences },
    Notify(Notification),
}
