use super::*;

#[test]
fn workspace_name_covers_digits_then_letters() {
    assert_eq!(workspace_name(0).unwrap(), "1");
    assert_eq!(workspace_name(8).unwrap(), "9");
    assert_eq!(workspace_name(9).unwrap(), "A");
    assert_eq!(workspace_name(10).unwrap(), "B");
    assert_eq!(workspace_name(34).unwrap(), "Z");
    assert_eq!(workspace_name(35), None);
}

#[test]
fn new_registry_holds_single_active_workspace_named_one() {
    let registry = WorkspaceRegistry::new();
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.list()[0].name, "1");
    assert_eq!(registry.active(), registry.list()[0].identifier);
    assert_eq!(registry.active_workspace().name, "1");
}

#[test]
fn add_appends_with_next_name_without_changing_active() {
    let mut registry = WorkspaceRegistry::new();
    let first = registry.active();

    let id = registry.add().added().unwrap();

    assert_eq!(registry.len(), 2);
    assert_eq!(registry.list()[1].identifier, id);
    assert_eq!(registry.list()[1].name, "2");
    assert_eq!(registry.active(), first);
}

#[test]
fn add_stops_at_capacity() {
    let mut registry = WorkspaceRegistry::new();
    for _ in 1..MAX_WORKSPACES {
        assert!(matches!(registry.add(), AddOutcome::Added(_)));
    }
    assert!(registry.is_full());
    assert_eq!(registry.list()[9].name, "A");
    assert_eq!(registry.list()[MAX_WORKSPACES - 1].name, "K");

    assert_eq!(
        registry.add(),
        AddOutcome::CapacityReached {
            limit: MAX_WORKSPACES
        }
    );
    assert_eq!(registry.len(), MAX_WORKSPACES);
}

#[test]
fn identifiers_are_unique() {
    let mut registry = WorkspaceRegistry::new();
    for _ in 1..MAX_WORKSPACES {
        registry.add();
    }
    let mut ids: Vec<_> = registry.list().iter().map(|w| w.identifier).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), MAX_WORKSPACES);
}

#[test]
fn set_active_round_trips_and_reports_change() {
    let mut registry = WorkspaceRegistry::new();
    let first = registry.active();
    let second = registry.add().added().unwrap();

    assert_eq!(registry.set_active(second), Ok(true));
    assert_eq!(registry.active(), second);
    assert_eq!(registry.set_active(second), Ok(false));
    assert_eq!(registry.set_active(first), Ok(true));
    assert_eq!(registry.active(), first);
}

#[test]
fn set_active_rejects_unknown_id() {
    let mut registry = WorkspaceRegistry::new();
    let before = registry.clone();
    let stranger = WorkspaceId::new();

    assert_eq!(
        registry.set_active(stranger),
        Err(RegistryError::InvalidWorkspaceId(stranger))
    );
    assert_eq!(registry, before);
}

#[test]
fn activate_index_ignores_out_of_range() {
    let mut registry = WorkspaceRegistry::new();
    let second = registry.add().added().unwrap();

    assert_eq!(registry.activate_index(1), Some(second));
    assert_eq!(registry.active(), second);
    assert_eq!(registry.activate_index(5), None);
    assert_eq!(registry.active(), second);
}

#[test]
fn from_list_makes_first_entry_active() {
    let list: Vec<Workspace> = (0..3).map(|i| Workspace::generate(i).unwrap()).collect();
    let registry = WorkspaceRegistry::from_list(list.clone()).unwrap();
    assert_eq!(registry.list(), &list[..]);
    assert_eq!(registry.active(), list[0].identifier);
}

#[test]
fn from_list_rejects_broken_lists() {
    assert!(WorkspaceRegistry::from_list(Vec::new()).is_none());

    let one = Workspace::generate(0).unwrap();
    assert!(WorkspaceRegistry::from_list(vec![one.clone(), one]).is_none());

    let too_many: Vec<Workspace> = (0..=MAX_WORKSPACES)
        .map(|i| Workspace::generate(i).unwrap())
        .collect();
    assert!(WorkspaceRegistry::from_list(too_many).is_none());
}

#[test]
fn workspace_serializes_with_identifier_and_name() {
    let ws = Workspace::generate(9).unwrap();
    let value = serde_json::to_value(&ws).unwrap();
    assert_eq!(value["name"], "A");
    assert_eq!(value["identifier"], ws.identifier.to_string());

    let back: Workspace = serde_json::from_value(value).unwrap();
    assert_eq!(back, ws);
}

#[test]
fn workspace_id_parses_its_display_form() {
    let id = WorkspaceId::new();
    let parsed: WorkspaceId = id.to_string().parse().unwrap();
    assert_eq!(parsed, id);
    assert!("nope".parse::<WorkspaceId>().is_err());
}
