//! Service ports: traits + data contracts.

pub mod config;
pub mod store;

pub use config::{ShellConfig, DEFAULT_SHELL_URL};
pub use store::{KeyValueStore, StoreError};
