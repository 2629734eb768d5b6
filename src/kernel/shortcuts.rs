//! Workspace-bar keyboard shortcuts: `ctrl+1`..`ctrl+9` switch to the n-th
//! workspace, `ctrl+n` adds one.

use crate::kernel::Action;

const SHORTCUT_SLOTS: usize = 9;

/// Maps a combinator such as `"ctrl+3"` to the action it triggers.
pub fn shortcut_action(combinator: &str) -> Option<Action> {
    let mut ctrl = false;
    let mut key_part: Option<String> = None;
    for part in combinator.split('+').map(str::trim).filter(|p| !p.is_empty()) {
        match part.to_ascii_lowercase().as_str() {
            "ctrl" | "control" | "mod" | "cmd" | "command" => ctrl = true,
            other => {
                if key_part.is_some() {
                    return None;
                }
                key_part = Some(other.to_string());
            }
        }
    }
    if !ctrl {
        return None;
    }

    let key = key_part?;
    let mut chars = key.chars();
    let ch = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    match ch {
        'n' => Some(Action::AddWorkspace),
        '1'..='9' => {
            let index = ch.to_digit(10)? as usize - 1;
            Some(Action::ActivateWorkspaceAt { index })
        }
        _ => None,
    }
}

/// Combinator shown next to the workspace at `index`, if it has one.
pub fn workspace_shortcut(index: usize) -> Option<String> {
    (index < SHORTCUT_SLOTS).then(|| format!("ctrl+{}", index + 1))
}

/// Human-readable rendering of a combinator for tooltips.
pub fn render_combinator(combinator: &str, mac: bool) -> String {
    combinator
        .split('+')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|part| match (part.to_ascii_lowercase().as_str(), mac) {
            ("alt", true) => "⌥".to_string(),
            ("shift", true) => "⇧".to_string(),
            ("mod" | "meta" | "cmd", true) => "⌘".to_string(),
            ("mod", false) => "CTRL".to_string(),
            _ => part.to_uppercase(),
        })
        .collect::<Vec<_>>()
        .join(" + ")
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/shortcuts.rs"]
mod tests;
