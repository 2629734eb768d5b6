use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const DEFAULT_SHELL_URL: &str = "about:blank";

/// Host-level configuration read from `molecule.json` in the data directory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShellConfig {
    /// URL every workspace falls back to when no home page is set.
    pub shell_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            shell_url: DEFAULT_SHELL_URL.to_string(),
            data_dir: None,
            log_filter: None,
        }
    }
}

impl ShellConfig {
    pub fn with_shell_url(shell_url: impl Into<String>) -> Self {
        Self {
            shell_url: shell_url.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/config.rs"]
mod tests;
