use super::*;
use serde_json::json;

#[test]
fn clones_share_entries() {
    let store = MemoryStore::new();
    let mut handle = store.clone();

    handle.set("k", json!("v")).unwrap();

    assert_eq!(store.get("k").unwrap(), Some(json!("v")));
    assert_eq!(store.writes(), 1);
    assert_eq!(store.keys(), vec!["k".to_string()]);
}

#[test]
fn switched_off_store_fails_every_call() {
    let mut store = MemoryStore::new();
    store.set("k", json!(1)).unwrap();
    store.set_available(false);

    assert!(matches!(store.get("k"), Err(StoreError::Unavailable(_))));
    assert!(store.set("k", json!(2)).is_err());
    assert!(store.delete_all().is_err());
    assert_eq!(store.writes(), 1);

    store.set_available(true);
    assert_eq!(store.get("k").unwrap(), Some(json!(1)));
}

#[test]
fn delete_all_clears_entries() {
    let mut store = MemoryStore::new();
    store.set("a", json!(1)).unwrap();
    store.set("b", json!(2)).unwrap();

    store.delete_all().unwrap();

    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
}
