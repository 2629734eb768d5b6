use crate::kernel::preferences::Preferences;
use crate::kernel::workspace::WorkspaceRegistry;

/// Everything the controller owns: the workspace registry and its own
/// mirror of the preference set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub workspaces: WorkspaceRegistry,
    pub preferences: Preferences,
}

impl AppState {
    pub fn new(workspaces: WorkspaceRegistry, preferences: Preferences) -> Self {
        Self {
            workspaces,
            preferences,
        }
    }
}
