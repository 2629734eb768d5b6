//! Typed preference set with hard-coded defaults.
//!
//! Values cross process boundaries as `serde_json::Value`; [`Preferences::apply`]
//! is the single place a wire value is checked against its key's type.

use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Namespace version for stored preference keys. Bumping it makes every
/// preference read fall back to its default; data under the old version is
/// left in place, never migrated.
pub const PREFERENCE_SCHEMA_VERSION: &str = "2.0.0";

const PREFERENCE_NAMESPACE: &str = "preferences";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreferenceKey {
    DarkTheme,
    HomePage,
    InjectCss,
    InjectJs,
    LastPage,
    RememberLastPage,
    ShowNavigationBar,
    ShowTitleBar,
    SwipeToNavigate,
    UseHardwareAcceleration,
    UserAgent,
    UseSpellChecker,
    WorkspaceBarPosition,
}

impl PreferenceKey {
    pub const ALL: [PreferenceKey; 13] = [
        PreferenceKey::DarkTheme,
        PreferenceKey::HomePage,
        PreferenceKey::InjectCss,
        PreferenceKey::InjectJs,
        PreferenceKey::LastPage,
        PreferenceKey::RememberLastPage,
        PreferenceKey::ShowNavigationBar,
        PreferenceKey::ShowTitleBar,
        PreferenceKey::SwipeToNavigate,
        PreferenceKey::UseHardwareAcceleration,
        PreferenceKey::UserAgent,
        PreferenceKey::UseSpellChecker,
        PreferenceKey::WorkspaceBarPosition,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::DarkTheme => "darkTheme",
            Self::HomePage => "homePage",
            Self::InjectCss => "injectCSS",
            Self::InjectJs => "injectJS",
            Self::LastPage => "lastPage",
            Self::RememberLastPage => "rememberLastPage",
            Self::ShowNavigationBar => "showNavigationBar",
            Self::ShowTitleBar => "showTitleBar",
            Self::SwipeToNavigate => "swipeToNavigate",
            Self::UseHardwareAcceleration => "useHardwareAcceleration",
            Self::UserAgent => "userAgent",
            Self::UseSpellChecker => "useSpellChecker",
            Self::WorkspaceBarPosition => "workspaceBarPosition",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.name() == name)
    }

    /// Key under which the value lives in the preference store:
    /// `preferences.<schema version>.<name>`.
    pub fn storage_key(self) -> String {
        format!(
            "{PREFERENCE_NAMESPACE}.{PREFERENCE_SCHEMA_VERSION}.{}",
            self.name()
        )
    }

    pub fn expected(self) -> &'static str {
        match self {
            Self::DarkTheme
            | Self::RememberLastPage
            | Self::ShowNavigationBar
            | Self::ShowTitleBar
            | Self::SwipeToNavigate
            | Self::UseHardwareAcceleration
            | Self::UseSpellChecker => "a boolean",
            Self::InjectCss | Self::InjectJs => "a string",
            Self::HomePage | Self::LastPage | Self::UserAgent => "a string or null",
            Self::WorkspaceBarPosition => "\"left\" or \"right\"",
        }
    }

    pub fn default_value(self) -> Value {
        Preferences::default().get(self)
    }
}

impl fmt::Display for PreferenceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PreferenceKey {
    type Err = PreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s.trim()).ok_or_else(|| PreferenceError::UnknownKey(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreferenceError {
    #[error("unknown preference: {0}")]
    UnknownKey(String),
    #[error("invalid value for preference {key}: expected {expected}")]
    InvalidValue {
        key: PreferenceKey,
        expected: &'static str,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkspaceBarPosition {
    #[default]
    Left,
    Right,
}

impl WorkspaceBarPosition {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    /// Side tooltips open towards, away from the bar.
    pub fn tooltip_side(self) -> &'static str {
        match self {
            Self::Left => "right",
            Self::Right => "left",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    pub dark_theme: bool,
    pub home_page: Option<String>,
    #[serde(rename = "injectCSS")]
    pub inject_css: String,
    #[serde(rename = "injectJS")]
    pub inject_js: String,
    pub last_page: Option<String>,
    pub remember_last_page: bool,
    pub show_navigation_bar: bool,
    pub show_title_bar: bool,
    pub swipe_to_navigate: bool,
    pub use_hardware_acceleration: bool,
    pub user_agent: Option<String>,
    pub use_spell_checker: bool,
    pub workspace_bar_position: WorkspaceBarPosition,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            dark_theme: false,
            home_page: None,
            inject_css: String::new(),
            inject_js: String::new(),
            last_page: None,
            remember_last_page: false,
            show_navigation_bar: true,
            show_title_bar: false,
            swipe_to_navigate: true,
            use_hardware_acceleration: true,
            user_agent: None,
            use_spell_checker: true,
            workspace_bar_position: WorkspaceBarPosition::Left,
        }
    }
}

impl Preferences {
    pub fn get(&self, key: PreferenceKey) -> Value {
        match key {
            PreferenceKey::DarkTheme => Value::Bool(self.dark_theme),
            PreferenceKey::HomePage => optional_string(&self.home_page),
            PreferenceKey::InjectCss => Value::String(self.inject_css.clone()),
            PreferenceKey::InjectJs => Value::String(self.inject_js.clone()),
            PreferenceKey::LastPage => optional_string(&self.last_page),
            PreferenceKey::RememberLastPage => Value::Bool(self.remember_last_page),
            PreferenceKey::ShowNavigationBar => Value::Bool(self.show_navigation_bar),
            PreferenceKey::ShowTitleBar => Value::Bool(self.show_title_bar),
            PreferenceKey::SwipeToNavigate => Value::Bool(self.swipe_to_navigate),
            PreferenceKey::UseHardwareAcceleration => Value::Bool(self.use_hardware_acceleration),
            PreferenceKey::UserAgent => optional_string(&self.user_agent),
            PreferenceKey::UseSpellChecker => Value::Bool(self.use_spell_checker),
            PreferenceKey::WorkspaceBarPosition => {
                Value::String(self.workspace_bar_position.as_str().to_string())
            }
        }
    }

    /// Stores `value` under `key`. Returns whether the set changed; a value of
    /// the wrong type is rejected and leaves the set untouched.
    pub fn apply(&mut self, key: PreferenceKey, value: &Value) -> Result<bool, PreferenceError> {
        let changed = match key {
            PreferenceKey::DarkTheme => replace(&mut self.dark_theme, parse(key, value)?),
            PreferenceKey::HomePage => replace(&mut self.home_page, parse(key, value)?),
            PreferenceKey::InjectCss => replace(&mut self.inject_css, parse(key, value)?),
            PreferenceKey::InjectJs => replace(&mut self.inject_js, parse(key, value)?),
            PreferenceKey::LastPage => replace(&mut self.last_page, parse(key, value)?),
            PreferenceKey::RememberLastPage => {
                replace(&mut self.remember_last_page, parse(key, value)?)
            }
            PreferenceKey::ShowNavigationBar => {
                replace(&mut self.show_navigation_bar, parse(key, value)?)
            }
            PreferenceKey::ShowTitleBar => replace(&mut self.show_title_bar, parse(key, value)?),
            PreferenceKey::SwipeToNavigate => {
                replace(&mut self.swipe_to_navigate, parse(key, value)?)
            }
            PreferenceKey::UseHardwareAcceleration => {
                replace(&mut self.use_hardware_acceleration, parse(key, value)?)
            }
            PreferenceKey::UserAgent => replace(&mut self.user_agent, parse(key, value)?),
            PreferenceKey::UseSpellChecker => {
                replace(&mut self.use_spell_checker, parse(key, value)?)
            }
            PreferenceKey::WorkspaceBarPosition => {
                replace(&mut self.workspace_bar_position, parse(key, value)?)
            }
        };
        Ok(changed)
    }

    /// Checks `value` against `key` without touching any set.
    pub fn validate(key: PreferenceKey, value: &Value) -> Result<(), PreferenceError> {
        Self::default().apply(key, value).map(|_| ())
    }

    /// A hidden navigation bar forces the title bar on.
    pub fn should_show_title_bar(&self) -> bool {
        self.show_title_bar || !self.show_navigation_bar
    }
}

fn optional_string(value: &Option<String>) -> Value {
    match value {
        Some(s) => Value::String(s.clone()),
        None => Value::Null,
    }
}

fn parse<T: DeserializeOwned>(key: PreferenceKey, value: &Value) -> Result<T, PreferenceError> {
    serde_json::from_value(value.clone()).map_err(|_| PreferenceError::InvalidValue {
        key,
        expected: key.expected(),
    })
}

fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/preferences.rs"]
mod tests;
