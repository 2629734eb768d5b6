//! The controller for one application session.
//!
//! A `Session` owns the workspace registry (through the [`Store`]), the two
//! persistence adapters, the content-view router and the broadcaster. It is
//! created at session start and passed by reference to whoever needs it.

use serde_json::Value;

use crate::kernel::error::Result;
use crate::kernel::preferences::{PreferenceKey, Preferences};
use crate::kernel::router::{self, ContentViewRouter, NavigationCommand, RoutedCommand};
use crate::kernel::services::adapters::{PreferenceService, WorkspaceListStore};
use crate::kernel::services::ports::{KeyValueStore, ShellConfig, StoreError};
use crate::kernel::services::{Broadcaster, SurfaceReceiver};
use crate::kernel::store::{DispatchResult, Store};
use crate::kernel::surface::UiSurface;
use crate::kernel::workspace::{AddOutcome, Workspace, WorkspaceId, WorkspaceRegistry};
use crate::kernel::{Action, AppState, Effect};

/// Current values a UI surface needs to (re)build its mirrors.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub preferences: Preferences,
    pub workspaces: Vec<Workspace>,
    pub active_id: WorkspaceId,
}

pub struct Session<P, W> {
    store: Store,
    preferences: PreferenceService<P>,
    workspace_list: WorkspaceListStore<W>,
    router: ContentViewRouter,
    bus: Broadcaster,
    config: ShellConfig,
}

impl<P: KeyValueStore, W: KeyValueStore> Session<P, W> {
    /// Loads the persisted workspace list (synthesizing and persisting the
    /// default workspace on first run) and the preference set.
    pub fn open(preference_store: P, workspace_store: W, config: ShellConfig) -> Result<Self> {
        let bus = Broadcaster::new();
        let preferences = PreferenceService::new(preference_store, bus.clone());
        let mut workspace_list = WorkspaceListStore::new(workspace_store);

        let restored = match workspace_list.load() {
            Ok(Some(list)) => {
                let len = list.len();
                let registry = WorkspaceRegistry::from_list(list);
                if registry.is_none() {
                    tracing::warn!(len, "persisted workspace list rejected, starting fresh");
                }
                registry
            }
            Ok(None) => None,
            Err(StoreError::Serialize(err)) => {
                tracing::warn!(%err, "persisted workspace list malformed, starting fresh");
                None
            }
            Err(err) => return Err(err.into()),
        };
        let workspaces = match restored {
            Some(registry) => registry,
            None => {
                let registry = WorkspaceRegistry::new();
                workspace_list.save(registry.list())?;
                registry
            }
        };

        let loaded = preferences.load_all()?;
        let mut router = ContentViewRouter::new();
        router.sync(&workspaces);

        tracing::info!(
            workspaces = workspaces.len(),
            active = %workspaces.active(),
            "session opened"
        );

        Ok(Self {
            store: Store::new(AppState::new(workspaces, loaded)),
            preferences,
            workspace_list,
            router,
            bus,
            config,
        })
    }

    /// Runs `action` through the reducer and executes its effects. Every
    /// effect is attempted; the first storage failure is returned.
    pub fn dispatch(&mut self, action: Action) -> Result<DispatchResult> {
        let result = self.store.dispatch(action);
        self.run_effects(&result.effects)?;
        Ok(result)
    }

    pub fn add_workspace(&mut self) -> Result<AddOutcome> {
        let (outcome, result) = self.store.add_workspace();
        self.run_effects(&result.effects)?;
        Ok(outcome)
    }

    pub fn set_active_workspace(&mut self, id: WorkspaceId) -> Result<()> {
        let result = self.store.set_active_workspace(id)?;
        self.run_effects(&result.effects)
    }

    pub fn active_workspace(&self) -> WorkspaceId {
        self.store.state().workspaces.active()
    }

    pub fn workspaces(&self) -> &[Workspace] {
        self.store.state().workspaces.list()
    }

    pub fn registry(&self) -> &WorkspaceRegistry {
        &self.store.state().workspaces
    }

    pub fn preferences(&self) -> &Preferences {
        &self.store.state().preferences
    }

    pub fn preference(&self, key: PreferenceKey) -> Value {
        self.preferences().get(key)
    }

    pub fn set_preference(&mut self, key: PreferenceKey, value: Value) -> Result<()> {
        let result = self.store.set_preference(key, value)?;
        self.run_effects(&result.effects)
    }

    pub fn set_preference_by_name(&mut self, name: &str, value: Value) -> Result<()> {
        let key: PreferenceKey = name.parse()?;
        self.set_preference(key, value)
    }

    pub fn reset_preferences(&mut self) -> Result<()> {
        let result = self.store.reset_preferences();
        self.run_effects(&result.effects)
    }

    /// Records the page the foreground view finished loading.
    pub fn record_last_page(&mut self, url: &str) -> Result<()> {
        self.set_preference(PreferenceKey::LastPage, Value::String(url.to_string()))
    }

    pub fn subscribe(&self) -> SurfaceReceiver {
        self.bus.subscribe()
    }

    /// Registers a new UI surface already primed with the current values.
    pub fn attach_surface(&self) -> UiSurface {
        let mut surface = UiSurface::attach(&self.bus);
        surface.refresh(self.snapshot());
        surface
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let state = self.store.state();
        SessionSnapshot {
            preferences: state.preferences.clone(),
            workspaces: state.workspaces.list().to_vec(),
            active_id: state.workspaces.active(),
        }
    }

    pub fn router(&self) -> &ContentViewRouter {
        &self.router
    }

    pub fn route(&self, command: NavigationCommand) -> Option<RoutedCommand> {
        self.router.route(command)
    }

    pub fn start_url(&self) -> &str {
        router::start_url(self.preferences(), &self.config.shell_url)
    }

    pub fn home_url(&self) -> &str {
        router::home_url(self.preferences(), &self.config.shell_url)
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    pub fn preference_store(&self) -> &P {
        self.preferences.store()
    }

    pub fn workspace_store(&self) -> &W {
        self.workspace_list.store()
    }

    fn run_effects(&mut self, effects: &[Effect]) -> Result<()> {
        let mut first_err = None;
        for effect in effects {
            if let Err(err) = self.run_effect(effect) {
                tracing::error!(%err, ?effect, "effect failed");
                first_err.get_or_insert(err);
            }
        }
        self.router.sync(&self.store.state().workspaces);
        match first_err {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn run_effect(&mut self, effect: &Effect) -> Result<()> {
        match effect {
            Effect::PersistWorkspaces(list) => {
                self.workspace_list.save(list)?;
            }
            Effect::WritePreference {
                key,
                value,
                previous,
            } => {
                if let Err(err) = self.preferences.set(*key, value.clone()) {
                    self.store.restore_preference(*key, previous);
                    return Err(err);
                }
            }
            Effect::ResetPreferences { previous } => {
                if let Err(err) = self.preferences.reset_all() {
                    self.store.replace_preferences(previous.clone());
                    return Err(err);
                }
            }
            Effect::Notify(msg) => {
                self.bus.broadcast(msg.clone());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/session.rs"]
mod tests;
