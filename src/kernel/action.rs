use serde_json::Value;

use crate::kernel::preferences::PreferenceKey;
use crate::kernel::workspace::WorkspaceId;

/// Mutations requested by UI surfaces (toolbar clicks, shortcuts, dialogs).
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    AddWorkspace,
    SetActiveWorkspace { id: WorkspaceId },
    ActivateWorkspaceAt { index: usize },
    SetPreference { key: PreferenceKey, value: Value },
    ResetPreferences,
}
