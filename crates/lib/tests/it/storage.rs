//! Storage port tests.

use std::fs;

use credbook::{FileStorage, InMemoryStorage, Storage};
use tempfile::TempDir;

fn exercise(storage: &dyn Storage) {
    assert_eq!(storage.get("k").unwrap(), None);
    storage.set("k", "[]".to_string()).unwrap();
    assert_eq!(storage.get("k").unwrap().as_deref(), Some("[]"));
    storage.remove("k").unwrap();
    assert_eq!(storage.get("k").unwrap(), None);
}

#[test]
fn test_in_memory_storage_contract() {
    exercise(&InMemoryStorage::new());
}

#[test]
fn test_file_storage_contract() {
    let dir = TempDir::new().unwrap();
    exercise(&FileStorage::open(dir.path().join("credbook.json")).unwrap());
}

#[test]
fn test_file_storage_writes_readable_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("credbook.json");
    let storage = FileStorage::open(&path).unwrap();
    storage.set("accounts", "[]".to_string()).unwrap();

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json["values"]["accounts"], "[]");
    // Version 0 is implied and not written
    assert!(json.get("_v").is_none());
}

#[test]
fn test_file_storage_open_error_on_directory() {
    let dir = TempDir::new().unwrap();
    let err = FileStorage::open(dir.path()).unwrap_err();
    assert!(err.is_io_error());
    assert_eq!(err.module(), "storage");
}
