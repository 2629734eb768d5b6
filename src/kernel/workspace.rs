//! Workspace records and the registry that owns them.
//!
//! A workspace is an isolated browsing partition. The registry keeps them in
//! creation order and tracks which one is active; it never removes entries.

use std::fmt;
use std::str::FromStr;

use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Upper bound on the number of workspaces a session may hold.
pub const MAX_WORKSPACES: usize = 20;

const LETTERS: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkspaceId(Uuid);

impl WorkspaceId {
    /// Time-ordered identifier (UUID v7).
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for WorkspaceId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for WorkspaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for WorkspaceId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(Self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workspace {
    pub identifier: WorkspaceId,
    pub name: CompactString,
}

impl Workspace {
    /// Builds the workspace created at position `order`, or `None` when that
    /// position has no display name.
    pub fn generate(order: usize) -> Option<Self> {
        let name = workspace_name(order)?;
        Some(Self {
            identifier: WorkspaceId::new(),
            name,
        })
    }
}

/// Display label for the workspace at creation position `order`:
/// `0..=8` map to `"1".."9"`, `9..=34` map to `"A".."Z"`.
pub fn workspace_name(order: usize) -> Option<CompactString> {
    let ch = match order {
        0..=8 => char::from(b'1' + order as u8),
        9..=34 => char::from(LETTERS[order - 9]),
        _ => return None,
    };
    let mut name = CompactString::default();
    name.push(ch);
    Some(name)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added(WorkspaceId),
    CapacityReached { limit: usize },
}

impl AddOutcome {
    pub fn added(self) -> Option<WorkspaceId> {
        match self {
            AddOutcome::Added(id) => Some(id),
            AddOutcome::CapacityReached { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("workspace {0} is not registered")]
    InvalidWorkspaceId(WorkspaceId),
}

/// Ordered workspace list plus the active selection.
///
/// Invariants: the list is never empty, holds at most [`MAX_WORKSPACES`]
/// entries with distinct identifiers, and `active_id` always names one of
/// them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceRegistry {
    list: Vec<Workspace>,
    active_id: WorkspaceId,
}

impl WorkspaceRegistry {
    /// Fresh registry holding the single default workspace `"1"`.
    pub fn new() -> Self {
        let first = Workspace {
            identifier: WorkspaceId::new(),
            name: CompactString::new("1"),
        };
        Self {
            active_id: first.identifier,
            list: vec![first],
        }
    }

    /// Restores a previously persisted list. The first entry becomes active.
    ///
    /// Returns `None` for lists that would break an invariant (empty, over
    /// capacity, duplicate identifiers).
    pub fn from_list(list: Vec<Workspace>) -> Option<Self> {
        if list.is_empty() || list.len() > MAX_WORKSPACES {
            return None;
        }
        for (i, ws) in list.iter().enumerate() {
            if list[..i].iter().any(|w| w.identifier == ws.identifier) {
                return None;
            }
        }
        let active_id = list[0].identifier;
        Some(Self { list, active_id })
    }

    pub fn list(&self) -> &[Workspace] {
        &self.list
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.list.len() >= MAX_WORKSPACES
    }

    pub fn active(&self) -> WorkspaceId {
        self.active_id
    }

    pub fn active_workspace(&self) -> &Workspace {
        // active_id always points into list
        self.get(self.active_id).unwrap_or(&self.list[0])
    }

    pub fn get(&self, id: WorkspaceId) -> Option<&Workspace> {
        self.list.iter().find(|w| w.identifier == id)
    }

    pub fn position(&self, id: WorkspaceId) -> Option<usize> {
        self.list.iter().position(|w| w.identifier == id)
    }

    pub fn contains(&self, id: WorkspaceId) -> bool {
        self.position(id).is_some()
    }

    pub fn add(&mut self) -> AddOutcome {
        if self.is_full() {
            return AddOutcome::CapacityReached {
                limit: MAX_WORKSPACES,
            };
        }
        let Some(workspace) = Workspace::generate(self.list.len()) else {
            return AddOutcome::CapacityReached {
                limit: self.list.len(),
            };
        };
        let id = workspace.identifier;
        self.list.push(workspace);
        AddOutcome::Added(id)
    }

    /// Returns whether the active workspace changed.
    pub fn set_active(&mut self, id: WorkspaceId) -> Result<bool, RegistryError> {
        if !self.contains(id) {
            return Err(RegistryError::InvalidWorkspaceId(id));
        }
        let changed = self.active_id != id;
        self.active_id = id;
        Ok(changed)
    }

    /// Activates the workspace at `index`, if there is one.
    pub fn activate_index(&mut self, index: usize) -> Option<WorkspaceId> {
        let id = self.list.get(index)?.identifier;
        self.active_id = id;
        Some(id)
    }
}

impl Default for WorkspaceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/workspace.rs"]
mod tests;
