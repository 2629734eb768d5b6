use super::*;
use crate::kernel::workspace::{WorkspaceRegistry, MAX_WORKSPACES};
use serde_json::json;

fn new_store() -> Store {
    Store::new(AppState::default())
}

#[test]
fn add_workspace_persists_then_notifies() {
    let mut store = new_store();

    let (outcome, result) = store.add_workspace();

    let id = outcome.added().unwrap();
    assert!(result.state_changed);
    let list = store.state().workspaces.list().to_vec();
    assert_eq!(list.len(), 2);
    assert_eq!(list[1].identifier, id);
    assert_eq!(
        result.effects,
        vec![
            Effect::PersistWorkspaces(list.clone()),
            Effect::Notify(Notification::WorkspacesChanged { list }),
        ]
    );
}

#[test]
fn add_workspace_at_capacity_only_notifies() {
    let mut store = new_store();
    for _ in 1..MAX_WORKSPACES {
        store.add_workspace();
    }

    let (outcome, result) = store.add_workspace();

    assert_eq!(
        outcome,
        AddOutcome::CapacityReached {
            limit: MAX_WORKSPACES
        }
    );
    assert!(!result.state_changed);
    assert_eq!(
        result.effects,
        vec![Effect::Notify(Notification::WorkspaceCapacityReached {
            limit: MAX_WORKSPACES
        })]
    );
}

#[test]
fn set_active_workspace_notifies_only_on_change() {
    let mut store = new_store();
    let first = store.state().workspaces.active();
    let (outcome, _) = store.add_workspace();
    let second = outcome.added().unwrap();

    let result = store.set_active_workspace(second).unwrap();
    assert!(result.state_changed);
    assert_eq!(
        result.effects,
        vec![Effect::Notify(Notification::ActiveWorkspaceChanged {
            active_id: second
        })]
    );

    let again = store.set_active_workspace(second).unwrap();
    assert!(!again.state_changed);
    assert!(again.effects.is_empty());

    store.set_active_workspace(first).unwrap();
    assert_eq!(store.state().workspaces.active(), first);
}

#[test]
fn dispatch_reports_unknown_workspace() {
    let mut store = new_store();
    let before = store.state().clone();
    let stranger = WorkspaceId::new();

    assert_eq!(
        store.set_active_workspace(stranger).unwrap_err(),
        RegistryError::InvalidWorkspaceId(stranger)
    );

    let result = store.dispatch(Action::SetActiveWorkspace { id: stranger });
    assert!(!result.state_changed);
    assert_eq!(
        result.effects,
        vec![Effect::Notify(Notification::WorkspaceRejected { id: stranger })]
    );
    assert_eq!(store.state(), &before);
}

#[test]
fn dispatch_activate_index_switches_by_position() {
    let mut store = new_store();
    store.add_workspace();
    store.add_workspace();
    let third = store.state().workspaces.list()[2].identifier;

    let result = store.dispatch(Action::ActivateWorkspaceAt { index: 2 });
    assert!(result.state_changed);
    assert_eq!(store.state().workspaces.active(), third);

    let missing = store.dispatch(Action::ActivateWorkspaceAt { index: 8 });
    assert!(!missing.state_changed);
    assert!(missing.effects.is_empty());
    assert_eq!(store.state().workspaces.active(), third);
}

#[test]
fn set_preference_always_writes() {
    let mut store = new_store();

    let result = store
        .set_preference(PreferenceKey::DarkTheme, json!(true))
        .unwrap();
    assert!(result.state_changed);
    assert!(store.state().preferences.dark_theme);
    assert_eq!(
        result.effects,
        vec![Effect::WritePreference {
            key: PreferenceKey::DarkTheme,
            value: json!(true),
            previous: json!(false),
        }]
    );

    let same = store
        .set_preference(PreferenceKey::DarkTheme, json!(true))
        .unwrap();
    assert!(!same.state_changed);
    assert_eq!(same.effects.len(), 1);
}

#[test]
fn dispatch_rejects_mistyped_preference() {
    let mut store = new_store();

    let result = store.dispatch(Action::SetPreference {
        key: PreferenceKey::ShowTitleBar,
        value: json!(1),
    });

    assert!(!result.state_changed);
    assert_eq!(
        result.effects,
        vec![Effect::Notify(Notification::PreferenceRejected {
            key: PreferenceKey::ShowTitleBar,
            expected: "a boolean"
        })]
    );
    assert_eq!(store.state().preferences, Preferences::default());
}

#[test]
fn reset_preferences_restores_defaults() {
    let mut store = new_store();
    store
        .set_preference(PreferenceKey::DarkTheme, json!(true))
        .unwrap();
    store
        .set_preference(PreferenceKey::WorkspaceBarPosition, json!("right"))
        .unwrap();

    let before = store.state().preferences.clone();

    let result = store.reset_preferences();

    assert!(result.state_changed);
    assert_eq!(
        result.effects,
        vec![Effect::ResetPreferences { previous: before }]
    );
    assert_eq!(store.state().preferences, Preferences::default());
}

#[test]
fn restore_preference_overwrites_mirror() {
    let mut store = new_store();
    store
        .set_preference(PreferenceKey::HomePage, json!("https://a.example"))
        .unwrap();

    store.restore_preference(PreferenceKey::HomePage, &Value::Null);
    assert_eq!(store.state().preferences.home_page, None);

    // mistyped values leave the mirror alone
    store.restore_preference(PreferenceKey::DarkTheme, &json!("dark"));
    assert!(!store.state().preferences.dark_theme);
}

#[test]
fn registry_state_starts_from_given_list() {
    let registry = WorkspaceRegistry::new();
    let store = Store::new(AppState::new(registry.clone(), Preferences::default()));
    assert_eq!(store.state().workspaces, registry);
}
