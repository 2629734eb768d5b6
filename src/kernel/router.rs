//! Content-view routing.
//!
//! Each workspace owns one long-lived content view bound to its persistent
//! partition. Switching workspaces never creates or destroys views; it only
//! moves the single foreground slot.

use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};

use crate::kernel::preferences::Preferences;
use crate::kernel::workspace::{WorkspaceId, WorkspaceRegistry};

new_key_type! {
    pub struct ViewKey;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Foreground,
    Background,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentView {
    pub workspace: WorkspaceId,
    pub partition: String,
    pub visibility: Visibility,
}

/// Storage partition name for a workspace's content view.
pub fn partition_name(id: WorkspaceId) -> String {
    format!("persist:{id}")
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteChange {
    pub created: Vec<WorkspaceId>,
    pub shown: Option<WorkspaceId>,
    pub hidden: Option<WorkspaceId>,
}

impl RouteChange {
    pub fn is_empty(&self) -> bool {
        self.created.is_empty() && self.shown.is_none() && self.hidden.is_none()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum NavigationCommand {
    GoBack,
    GoForward,
    Reload,
    GoHome,
    CopyUrl,
    LoadUrl(String),
    SetZoomFactor(f64),
    FindInPage { text: String, forward: bool },
    StopFindInPage,
    ToggleDevTools,
}

/// A navigation command bound to the view that must execute it.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutedCommand {
    pub workspace: WorkspaceId,
    pub command: NavigationCommand,
}

#[derive(Debug, Default)]
pub struct ContentViewRouter {
    views: SlotMap<ViewKey, ContentView>,
    by_workspace: FxHashMap<WorkspaceId, ViewKey>,
    order: Vec<ViewKey>,
    foreground: Option<ViewKey>,
}

impl ContentViewRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Brings the views in line with `registry`: one view per workspace, the
    /// active one in the foreground, every other one in the background.
    pub fn sync(&mut self, registry: &WorkspaceRegistry) -> RouteChange {
        let mut change = RouteChange::default();

        for workspace in registry.list() {
            if self.by_workspace.contains_key(&workspace.identifier) {
                continue;
            }
            let key = self.views.insert(ContentView {
                workspace: workspace.identifier,
                partition: partition_name(workspace.identifier),
                visibility: Visibility::Background,
            });
            self.by_workspace.insert(workspace.identifier, key);
            self.order.push(key);
            change.created.push(workspace.identifier);
        }

        let Some(&target) = self.by_workspace.get(&registry.active()) else {
            return change;
        };
        if self.foreground == Some(target) {
            return change;
        }

        if let Some(prev) = self.foreground.and_then(|key| self.views.get_mut(key)) {
            prev.visibility = Visibility::Background;
            change.hidden = Some(prev.workspace);
        }
        if let Some(next) = self.views.get_mut(target) {
            next.visibility = Visibility::Foreground;
            change.shown = Some(next.workspace);
        }
        self.foreground = Some(target);

        if !change.is_empty() {
            tracing::debug!(
                created = change.created.len(),
                shown = ?change.shown,
                hidden = ?change.hidden,
                "content views synced"
            );
        }
        change
    }

    pub fn foreground(&self) -> Option<&ContentView> {
        self.foreground.and_then(|key| self.views.get(key))
    }

    pub fn view(&self, id: WorkspaceId) -> Option<&ContentView> {
        self.by_workspace
            .get(&id)
            .and_then(|&key| self.views.get(key))
    }

    pub fn visibility(&self, id: WorkspaceId) -> Option<Visibility> {
        self.view(id).map(|view| view.visibility)
    }

    /// Views in creation order.
    pub fn views(&self) -> impl Iterator<Item = &ContentView> + '_ {
        self.order.iter().filter_map(|&key| self.views.get(key))
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    /// Navigation only ever targets the foreground view.
    pub fn route(&self, command: NavigationCommand) -> Option<RoutedCommand> {
        let view = self.foreground()?;
        Some(RoutedCommand {
            workspace: view.workspace,
            command,
        })
    }
}

/// Home page when one is set (longer than one character), else the shell URL.
pub fn home_url<'a>(preferences: &'a Preferences, shell_url: &'a str) -> &'a str {
    match preferences.home_page.as_deref() {
        Some(home) if home.chars().count() > 1 => home,
        _ => shell_url,
    }
}

/// First URL a content view loads: the last visited page when remembering is
/// on, otherwise the home URL.
pub fn start_url<'a>(preferences: &'a Preferences, shell_url: &'a str) -> &'a str {
    if preferences.remember_last_page {
        if let Some(last) = preferences.last_page.as_deref().filter(|s| !s.is_empty()) {
            return last;
        }
    }
    home_url(preferences, shell_url)
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/router.rs"]
mod tests;
