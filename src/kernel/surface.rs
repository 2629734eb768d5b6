//! UI-side mirror of controller state.
//!
//! A surface never mutates the session. It folds incoming notifications into
//! local copies; a surface that missed broadcasts catches up with
//! [`UiSurface::refresh`].

use serde_json::Value;

use crate::kernel::preferences::{PreferenceKey, Preferences};
use crate::kernel::services::{Broadcaster, Notification, SurfaceReceiver};
use crate::kernel::session::SessionSnapshot;
use crate::kernel::workspace::{Workspace, WorkspaceId};

pub struct UiSurface {
    rx: SurfaceReceiver,
    preferences: Preferences,
    workspaces: Vec<Workspace>,
    active_id: Option<WorkspaceId>,
    reports: Vec<Notification>,
}

impl UiSurface {
    /// Registers with `bus`; mirrors start at defaults until the first
    /// refresh or notification.
    pub fn attach(bus: &Broadcaster) -> Self {
        Self {
            rx: bus.subscribe(),
            preferences: Preferences::default(),
            workspaces: Vec::new(),
            active_id: None,
            reports: Vec::new(),
        }
    }

    /// Applies every pending notification. Returns how many were applied.
    pub fn pump(&mut self) -> usize {
        let pending = self.rx.drain();
        let count = pending.len();
        for msg in pending {
            self.apply(msg);
        }
        count
    }

    pub fn refresh(&mut self, snapshot: SessionSnapshot) {
        self.preferences = snapshot.preferences;
        self.workspaces = snapshot.workspaces;
        self.active_id = Some(snapshot.active_id);
    }

    fn apply(&mut self, msg: Notification) {
        match msg {
            Notification::PreferenceChanged { key, value } => {
                if let Err(err) = self.preferences.apply(key, &value) {
                    tracing::warn!(%err, "surface dropped preference update");
                }
            }
            Notification::WorkspacesChanged { list } => {
                self.workspaces = list;
            }
            Notification::ActiveWorkspaceChanged { active_id } => {
                self.active_id = Some(active_id);
            }
            report => self.reports.push(report),
        }
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    pub fn preference(&self, key: PreferenceKey) -> Value {
        self.preferences.get(key)
    }

    pub fn workspaces(&self) -> &[Workspace] {
        &self.workspaces
    }

    pub fn active_workspace(&self) -> Option<WorkspaceId> {
        self.active_id
    }

    pub fn is_active(&self, id: WorkspaceId) -> bool {
        self.active_id == Some(id)
    }

    /// Capacity/rejection reports received since the last call.
    pub fn take_reports(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.reports)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/surface.rs"]
mod tests;
