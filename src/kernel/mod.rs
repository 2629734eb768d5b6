//! Headless shell core (state/action/effect).

pub mod action;
pub mod effect;
pub mod error;
pub mod preferences;
pub mod router;
pub mod services;
pub mod session;
pub mod shortcuts;
pub mod state;
pub mod store;
pub mod surface;
pub mod workspace;

pub use action::Action;
pub use effect::Effect;
pub use error::SessionError;
pub use preferences::{PreferenceKey, Preferences, WorkspaceBarPosition};
pub use router::{ContentViewRouter, NavigationCommand, RoutedCommand, Visibility};
pub use session::{Session, SessionSnapshot};
pub use state::AppState;
pub use store::{DispatchResult, Store};
pub use surface::UiSurface;
pub use workspace::{AddOutcome, Workspace, WorkspaceId, WorkspaceRegistry, MAX_WORKSPACES};
