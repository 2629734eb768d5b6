use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::sync::{Arc, Mutex, PoisonError};

use serde_json::Value;

use crate::kernel::preferences::PreferenceKey;
use crate::kernel::workspace::{Workspace, WorkspaceId};

/// One-way notification fanned out to every live UI surface.
#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    PreferenceChanged { key: PreferenceKey, value: Value },
    PreferenceRejected { key: PreferenceKey, expected: &'static str },
    WorkspacesChanged { list: Vec<Workspace> },
    ActiveWorkspaceChanged { active_id: WorkspaceId },
    WorkspaceCapacityReached { limit: usize },
    WorkspaceRejected { id: WorkspaceId },
}

impl Notification {
    /// Conditions a surface should show to the user rather than just mirror.
    pub fn is_report(&self) -> bool {
        matches!(
            self,
            Notification::WorkspaceCapacityReached { .. }
                | Notification::WorkspaceRejected { .. }
                | Notification::PreferenceRejected { .. }
        )
    }
}

/// Fan-out side of the notification channel. Clones share one surface list.
#[derive(Clone, Default)]
pub struct Broadcaster {
    surfaces: Arc<Mutex<Vec<Sender<Notification>>>>,
}

pub struct SurfaceReceiver {
    rx: Receiver<Notification>,
}

impl Broadcaster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new surface. It only sees notifications sent after this call.
    pub fn subscribe(&self) -> SurfaceReceiver {
        let (tx, rx) = mpsc::channel();
        self.surfaces
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(tx);
        SurfaceReceiver { rx }
    }

    /// Sends `msg` to every registered surface and returns how many received
    /// it. Surfaces whose receiver was dropped are unregistered.
    pub fn broadcast(&self, msg: Notification) -> usize {
        let mut surfaces = self.surfaces.lock().unwrap_or_else(PoisonError::into_inner);
        surfaces.retain(|tx| tx.send(msg.clone()).is_ok());
        let delivered = surfaces.len();
        tracing::trace!(delivered, ?msg, "broadcast");
        delivered
    }

    pub fn surface_count(&self) -> usize {
        self.surfaces
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl SurfaceReceiver {
    pub fn try_recv(&mut self) -> Result<Notification, TryRecvError> {
        self.rx.try_recv()
    }

    /// Everything queued right now, oldest first.
    pub fn drain(&mut self) -> Vec<Notification> {
        self.rx.try_iter().collect()
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/services/bus.rs"]
mod tests;
