use super::*;
use crate::kernel::services::adapters::MemoryStore;
use crate::kernel::workspace::WorkspaceRegistry;
use serde_json::json;

#[test]
fn load_returns_none_before_first_save() {
    let list_store = WorkspaceListStore::new(MemoryStore::new());
    assert!(list_store.load().unwrap().is_none());
}

#[test]
fn save_then_load_preserves_order_and_ids() {
    let mut registry = WorkspaceRegistry::new();
    registry.add();
    registry.add();
    let backing = MemoryStore::new();
    let mut list_store = WorkspaceListStore::new(backing.clone());

    list_store.save(registry.list()).unwrap();

    assert_eq!(backing.keys(), vec![WORKSPACE_LIST_KEY.to_string()]);
    let loaded = list_store.load().unwrap().unwrap();
    assert_eq!(loaded, registry.list());
}

#[test]
fn stored_list_is_plain_json_array() {
    let registry = WorkspaceRegistry::new();
    let backing = MemoryStore::new();
    let mut list_store = WorkspaceListStore::new(backing.clone());
    list_store.save(registry.list()).unwrap();

    let id = registry.active().to_string();
    assert_eq!(
        backing.get(WORKSPACE_LIST_KEY).unwrap(),
        Some(json!([{ "identifier": id, "name": "1" }]))
    );
}

#[test]
fn malformed_list_is_a_serialize_error() {
    let mut backing = MemoryStore::new();
    backing
        .set(WORKSPACE_LIST_KEY, json!({ "not": "a list" }))
        .unwrap();

    let list_store = WorkspaceListStore::new(backing);
    assert!(matches!(list_store.load(), Err(StoreError::Serialize(_))));
}

#[test]
fn unavailable_store_surfaces_error() {
    let backing = MemoryStore::new();
    backing.set_available(false);
    let mut list_store = WorkspaceListStore::new(backing);

    assert!(matches!(list_store.load(), Err(StoreError::Unavailable(_))));
    assert!(list_store.save(&[]).is_err());
}
