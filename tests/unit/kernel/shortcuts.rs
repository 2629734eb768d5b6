use super::*;

#[test]
fn digit_shortcuts_activate_by_position() {
    assert_eq!(
        shortcut_action("ctrl+1"),
        Some(Action::ActivateWorkspaceAt { index: 0 })
    );
    assert_eq!(
        shortcut_action("Ctrl + 9"),
        Some(Action::ActivateWorkspaceAt { index: 8 })
    );
    assert_eq!(
        shortcut_action("mod+4"),
        Some(Action::ActivateWorkspaceAt { index: 3 })
    );
}

#[test]
fn ctrl_n_adds_workspace() {
    assert_eq!(shortcut_action("ctrl+n"), Some(Action::AddWorkspace));
    assert_eq!(shortcut_action("CMD+N"), Some(Action::AddWorkspace));
}

#[test]
fn unbound_combinators_map_to_nothing() {
    assert_eq!(shortcut_action("1"), None);
    assert_eq!(shortcut_action("ctrl+0"), None);
    assert_eq!(shortcut_action("ctrl+a"), None);
    assert_eq!(shortcut_action("ctrl+10"), None);
    assert_eq!(shortcut_action("ctrl+1+2"), None);
    assert_eq!(shortcut_action("alt+1"), None);
    assert_eq!(shortcut_action(""), None);
}

#[test]
fn only_first_nine_workspaces_have_shortcuts() {
    assert_eq!(workspace_shortcut(0).as_deref(), Some("ctrl+1"));
    assert_eq!(workspace_shortcut(8).as_deref(), Some("ctrl+9"));
    assert_eq!(workspace_shortcut(9), None);
}

#[test]
fn render_combinator_uses_platform_symbols() {
    assert_eq!(render_combinator("mod+1", false), "CTRL + 1");
    assert_eq!(render_combinator("mod+shift+n", true), "⌘ + ⇧ + N");
    assert_eq!(render_combinator("ctrl+n", true), "CTRL + N");
}
