//! Service adapters: storage and OS specific implementations.

pub mod config;
pub mod json_store;
pub mod memory_store;
pub mod paths;
pub mod preferences;
pub mod workspaces;

pub use config::{ensure_config_file, load_config, ConfigService};
pub use json_store::JsonFileStore;
pub use memory_store::MemoryStore;
pub use paths::{
    config_file, ensure_data_dir, ensure_log_dir, get_data_dir, get_log_dir, local_storage_file,
    preferences_file,
};
pub use preferences::PreferenceService;
pub use workspaces::{WorkspaceListStore, WORKSPACE_LIST_KEY};
