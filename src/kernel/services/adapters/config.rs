//! Shell configuration service: loads `molecule.json`, fills missing fields
//! with defaults, and holds the result for the session.

use std::path::{Path, PathBuf};

use crate::kernel::services::ports::config::ShellConfig;

pub struct ConfigService {
    config: ShellConfig,
    path: Option<PathBuf>,
}

impl ConfigService {
    pub fn new() -> Self {
        Self {
            config: ShellConfig::default(),
            path: None,
        }
    }

    /// Reads the config at `path`; an unreadable or malformed file falls back
    /// to defaults with a warning.
    pub fn load(path: &Path) -> Self {
        let config = match load_config(path) {
            Some(config) => config,
            None => {
                tracing::warn!(path = %path.display(), "config unreadable, using defaults");
                ShellConfig::default()
            }
        };
        Self {
            config,
            path: Some(path.to_path_buf()),
        }
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn set_shell_url(&mut self, url: impl Into<String>) {
        self.config.shell_url = url.into();
    }

    pub fn into_config(self) -> ShellConfig {
        self.config
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}

/// Writes a default config file when none exists yet.
pub fn ensure_config_file(path: &Path) -> std::io::Result<PathBuf> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    if !path.exists() {
        let content = serde_json::to_string_pretty(&ShellConfig::default())
            .unwrap_or_else(|_| "{}".to_string());
        std::fs::write(path, content)?;
    }
    Ok(path.to_path_buf())
}

pub fn load_config(path: &Path) -> Option<ShellConfig> {
    let data = std::fs::read_to_string(path).ok()?;
    serde_json::from_str(&data).ok()
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/config.rs"]
mod tests;
