use serde_json::Value;

use super::preferences::{PreferenceError, PreferenceKey, Preferences};
use super::services::Notification;
use super::workspace::{AddOutcome, RegistryError, WorkspaceId};
use super::{Action, AppState, Effect};

#[derive(Debug)]
pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    fn unchanged() -> Self {
        Self {
            effects: Vec::new(),
            state_changed: false,
        }
    }

    fn notify(msg: Notification) -> Self {
        Self {
            effects: vec![Effect::Notify(msg)],
            state_changed: false,
        }
    }
}

pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Reducer for UI-originated actions. Rejections are reported as
    /// notifications rather than errors.
    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::AddWorkspace => self.add_workspace().1,
            Action::SetActiveWorkspace { id } => self
                .set_active_workspace(id)
                .unwrap_or_else(|RegistryError::InvalidWorkspaceId(id)| {
                    DispatchResult::notify(Notification::WorkspaceRejected { id })
                }),
            Action::ActivateWorkspaceAt { index } => {
                let prev = self.state.workspaces.active();
                match self.state.workspaces.activate_index(index) {
                    Some(id) if id != prev => Self::activated(id),
                    _ => DispatchResult::unchanged(),
                }
            }
            Action::SetPreference { key, value } => {
                self.set_preference(key, value).unwrap_or_else(|err| match err {
                    PreferenceError::InvalidValue { key, expected } => {
                        DispatchResult::notify(Notification::PreferenceRejected { key, expected })
                    }
                    PreferenceError::UnknownKey(_) => DispatchResult::unchanged(),
                })
            }
            Action::ResetPreferences => self.reset_preferences(),
        }
    }

    pub fn add_workspace(&mut self) -> (AddOutcome, DispatchResult) {
        let outcome = self.state.workspaces.add();
        let result = match outcome {
            AddOutcome::Added(id) => {
                let list = self.state.workspaces.list().to_vec();
                tracing::debug!(%id, workspaces = list.len(), "workspace added");
                DispatchResult {
                    effects: vec![
                        Effect::PersistWorkspaces(list.clone()),
                        Effect::Notify(Notification::WorkspacesChanged { list }),
                    ],
                    state_changed: true,
                }
            }
            AddOutcome::CapacityReached { limit } => {
                tracing::warn!(limit, "workspace capacity reached");
                DispatchResult::notify(Notification::WorkspaceCapacityReached { limit })
            }
        };
        (outcome, result)
    }

    pub fn set_active_workspace(&mut self, id: WorkspaceId) -> Result<DispatchResult, RegistryError> {
        if self.state.workspaces.set_active(id)? {
            Ok(Self::activated(id))
        } else {
            Ok(DispatchResult::unchanged())
        }
    }

    pub fn set_preference(
        &mut self,
        key: PreferenceKey,
        value: Value,
    ) -> Result<DispatchResult, PreferenceError> {
        let previous = self.state.preferences.get(key);
        let state_changed = self.state.preferences.apply(key, &value)?;
        // written even when unchanged so the store and every surface agree
        Ok(DispatchResult {
            effects: vec![Effect::WritePreference {
                key,
                value,
                previous,
            }],
            state_changed,
        })
    }

    pub fn reset_preferences(&mut self) -> DispatchResult {
        let previous = std::mem::take(&mut self.state.preferences);
        let state_changed = previous != self.state.preferences;
        DispatchResult {
            effects: vec![Effect::ResetPreferences { previous }],
            state_changed,
        }
    }

    /// Puts back a mirror value whose write did not reach the store.
    pub fn restore_preference(&mut self, key: PreferenceKey, value: &Value) {
        if let Err(err) = self.state.preferences.apply(key, value) {
            tracing::warn!(%key, %err, "could not restore preference");
        }
    }

    pub fn replace_preferences(&mut self, preferences: Preferences) {
        self.state.preferences = preferences;
    }

    fn activated(id: WorkspaceId) -> DispatchResult {
        tracing::debug!(%id, "active workspace changed");
        DispatchResult {
            effects: vec![Effect::Notify(Notification::ActiveWorkspaceChanged {
                active_id: id,
            })],
            state_changed: true,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
