use super::*;
use serde_json::json;
use tempfile::tempdir;

#[test]
fn missing_file_opens_empty() {
    let dir = tempdir().unwrap();
    let store = JsonFileStore::open(dir.path().join("store.json")).unwrap();
    assert!(store.is_empty());
    assert_eq!(store.get("anything").unwrap(), None);
}

#[test]
fn set_writes_through_to_disk() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("store.json");

    let mut store = JsonFileStore::open(&path).unwrap();
    store.set("preferences.2.0.0.darkTheme", json!(true)).unwrap();
    store.set("workspaceList_v2", json!([])).unwrap();

    let reopened = JsonFileStore::open(&path).unwrap();
    assert_eq!(reopened.len(), 2);
    assert_eq!(
        reopened.get("preferences.2.0.0.darkTheme").unwrap(),
        Some(json!(true))
    );
    assert!(!path.with_extension("json.tmp").exists());
}

#[test]
fn delete_all_empties_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("store.json");
    let mut store = JsonFileStore::open(&path).unwrap();
    store.set("a", json!(1)).unwrap();

    store.delete_all().unwrap();

    assert!(store.is_empty());
    assert!(JsonFileStore::open(&path).unwrap().is_empty());
}

#[test]
fn empty_file_is_empty_store() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("store.json");
    std::fs::write(&path, "  \n").unwrap();
    assert!(JsonFileStore::open(&path).unwrap().is_empty());
}

#[test]
fn malformed_file_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("store.json");

    std::fs::write(&path, "{ not json").unwrap();
    assert!(matches!(
        JsonFileStore::open(&path),
        Err(StoreError::Serialize(_))
    ));

    std::fs::write(&path, "[1, 2]").unwrap();
    assert!(matches!(
        JsonFileStore::open(&path),
        Err(StoreError::Unavailable(_))
    ));
}

#[test]
fn failed_flush_keeps_memory_unchanged() {
    let dir = tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    let mut store = JsonFileStore::open(blocker.join("store.json")).unwrap();
    std::fs::write(&blocker, "file, not a directory").unwrap();

    assert!(store.set("a", json!(1)).is_err());
    assert!(store.is_empty());
    assert_eq!(store.get("a").unwrap(), None);
}
