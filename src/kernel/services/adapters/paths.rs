//! Data directory layout.
//!
//! Per-platform application data root, overridable with `MOLECULE_DATA_DIR`:
//! - macOS: ~/Library/Application Support/molecule
//! - Linux: $XDG_DATA_HOME/molecule or ~/.local/share/molecule
//! - Windows: %APPDATA%\molecule

use std::path::{Path, PathBuf};

const APP_NAME: &str = "molecule";
const DATA_DIR_ENV: &str = "MOLECULE_DATA_DIR";
const LOG_DIR: &str = "logs";
const PREFERENCES_FILE: &str = "preferences.json";
const LOCAL_STORAGE_FILE: &str = "local-storage.json";
const CONFIG_FILE: &str = "molecule.json";

/// Data root: `MOLECULE_DATA_DIR` when set, else the platform's per-user
/// application data directory.
fn get_app_data_dir() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(dir));
    }

    let base = if cfg!(target_os = "macos") {
        home_relative("Library/Application Support")
    } else if cfg!(target_os = "windows") {
        std::env::var_os("APPDATA").map(PathBuf::from)
    } else if cfg!(target_os = "linux") {
        std::env::var_os("XDG_DATA_HOME")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .or_else(|| home_relative(".local/share"))
    } else {
        None
    };
    base.map(|dir| dir.join(APP_NAME))
}

fn home_relative(sub: &str) -> Option<PathBuf> {
    std::env::var_os("HOME").map(|home| PathBuf::from(home).join(sub))
}

pub fn get_data_dir() -> Option<PathBuf> {
    get_app_data_dir()
}

pub fn get_log_dir(data_dir: &Path) -> PathBuf {
    data_dir.join(LOG_DIR)
}

/// Backing file of the preference store.
pub fn preferences_file(data_dir: &Path) -> PathBuf {
    data_dir.join(PREFERENCES_FILE)
}

/// Backing file of the UI-side local storage holding the workspace list.
pub fn local_storage_file(data_dir: &Path) -> PathBuf {
    data_dir.join(LOCAL_STORAGE_FILE)
}

pub fn config_file(data_dir: &Path) -> PathBuf {
    data_dir.join(CONFIG_FILE)
}

pub fn ensure_data_dir() -> std::io::Result<PathBuf> {
    let dir = get_data_dir().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Cannot determine data directory",
        )
    })?;

    if !dir.exists() {
        std::fs::create_dir_all(&dir)?;
    }

    Ok(dir)
}

pub fn ensure_log_dir(data_dir: &Path) -> std::io::Result<PathBuf> {
    let dir = get_log_dir(data_dir);
    if !dir.exists() {
        std::fs::create_dir_all(&dir)?;
    }
    Ok(dir)
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/paths.rs"]
mod tests;
