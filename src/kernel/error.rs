use thiserror::Error;

use crate::kernel::preferences::PreferenceError;
use crate::kernel::services::ports::StoreError;
use crate::kernel::workspace::RegistryError;

/// Errors surfaced to callers of the session API. None of them are fatal:
/// the in-memory state stays usable after any of these.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error(transparent)]
    Preference(#[from] PreferenceError),
    #[error(transparent)]
    Storage(#[from] StoreError),
}

pub type Result<T> = std::result::Result<T, SessionError>;
