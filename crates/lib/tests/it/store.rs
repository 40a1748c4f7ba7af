//! AccountStore integration tests.
//!
//! Covers hydration from previously persisted data, persistence across store instances,
//! and recovery from damaged or unavailable storage.

use std::sync::Arc;

use credbook::{
    AccountPatch, AccountStore, AccountType, InMemoryStorage, StoreConfig, constants::STORAGE_KEY,
    parse_labels,
};
use serde_json::json;
use tempfile::TempDir;

use crate::helpers::*;

#[test]
fn test_round_trip_through_file_storage() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("credbook.json");

    let expected = {
        let mut store = file_store(&path);
        let ldap = store.add_empty();
        store.update_partial(
            &ldap,
            AccountPatch::new()
                .with_login("alice")
                .with_labels(parse_labels("corp; vpn")),
        );

        let local = store.add_empty();
        store.set_type(&local, AccountType::Local);
        store.update_partial(
            &local,
            AccountPatch::new()
                .with_login("  bob  ")
                .with_password(Some("p@ss; word".to_string())),
        );

        assert!(!store.has_invalid());
        store.accounts().to_vec()
    };

    let reopened = file_store(&path);
    assert_eq!(reopened.accounts(), expected.as_slice());
    assert_eq!(reopened.accounts()[1].login, "  bob  ");
}

#[test]
fn test_round_trip_preserves_invalid_records() {
    let (storage, mut store) = memory_store();
    let id = store.add_empty();
    store.update_partial(&id, AccountPatch::new().with_password(Some("oops".into())));

    let mut fresh = AccountStore::new(storage.clone());
    fresh.hydrate();
    assert_eq!(fresh.accounts(), store.accounts());
    assert!(fresh.has_invalid());
}

#[test]
fn test_corrupted_records_are_dropped() {
    let storage = Arc::new(InMemoryStorage::new());
    let good_local = local_account("a", "alice", "pw");
    let good_ldap = ldap_account("b", "bob");
    let raw = json!([
        good_local,
        { "id": "x", "type": "FOO", "login": "x", "password": null, "labels": [] },
        { "id": 7, "type": "LDAP", "login": "x", "password": null, "labels": [] },
        { "id": "y", "type": "LDAP", "login": "x", "labels": [] },
        { "id": "z", "type": "LDAP", "login": "x", "password": null, "labels": [{ "name": 1 }] },
        "garbage",
        good_ldap,
    ]);
    seed_raw(&*storage, &raw.to_string());

    let mut store = AccountStore::new(storage.clone());
    store.hydrate();

    let ids: Vec<&str> = store.accounts().iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"]);

    // The cleaned list is written back immediately
    let stored: serde_json::Value =
        serde_json::from_str(&storage_value(&storage)).unwrap();
    assert_eq!(stored.as_array().unwrap().len(), 2);
}

#[test]
fn test_extra_fields_are_ignored() {
    let storage = Arc::new(InMemoryStorage::new());
    seed_raw(
        &*storage,
        r#"[{"id":"a","type":"LOCAL","login":"alice","password":"pw","labels":[{"text":"t"}],"color":"red"}]"#,
    );

    let mut store = AccountStore::new(storage);
    store.hydrate();
    assert_eq!(store.len(), 1);
    assert_eq!(store.accounts()[0].labels[0].text, "t");
}

#[test]
fn test_unreadable_payloads_hydrate_empty() {
    for raw in ["not json", "{\"id\":\"a\"}", "null", "42", ""] {
        let storage = Arc::new(InMemoryStorage::new());
        seed_raw(&*storage, raw);

        let mut store = AccountStore::new(storage.clone());
        store.hydrate();
        assert!(store.is_empty(), "payload {raw:?} should hydrate empty");
        assert_eq!(storage_value(&storage), "[]");
    }
}

#[test]
fn test_read_failure_hydrates_empty_and_keeps_persisting() {
    let storage = Arc::new(RecordingStorage {
        fail_reads: true,
        ..Default::default()
    });
    let mut store = AccountStore::new(storage.clone());
    store.hydrate();
    assert!(store.is_empty());

    store.add_empty();
    let writes = storage.writes.lock().unwrap();
    // One immediate write on hydration, one for the add
    assert_eq!(writes.len(), 2);
    assert_eq!(writes[0], "[]");
}

#[test]
fn test_write_failures_never_surface() {
    let storage = Arc::new(RecordingStorage {
        fail_writes: true,
        ..Default::default()
    });
    let mut store = AccountStore::new(storage.clone());
    store.hydrate();

    let id = store.add_empty();
    store.set_type(&id, AccountType::Local);
    store.update_partial(&id, AccountPatch::new().with_login("x"));
    store.remove(&id);

    assert!(store.is_empty());
    assert!(storage.writes.lock().unwrap().is_empty());
}

#[test]
fn test_every_mutation_writes_full_list() {
    let storage = Arc::new(RecordingStorage::default());
    let mut store = AccountStore::new(storage.clone());
    store.hydrate();

    let a = store.add_empty();
    let b = store.add_empty();
    store.update_partial(&a, AccountPatch::new().with_login("alice"));
    store.set_type(&b, AccountType::Local);
    store.remove(&a);
    store.remove(&a);

    let writes = storage.writes.lock().unwrap();
    assert_eq!(writes.len(), 6);
    let last: Vec<credbook::Account> = serde_json::from_str(writes.last().unwrap()).unwrap();
    assert_eq!(last, store.accounts());
}

#[test]
fn test_hydrate_twice_has_no_duplicate_side_effects() {
    let storage = Arc::new(RecordingStorage::default());
    let mut store = AccountStore::new(storage.clone());
    store.hydrate();
    store.hydrate();
    assert!(store.is_empty());
    assert_eq!(storage.writes.lock().unwrap().len(), 1);

    store.add_empty();
    assert_eq!(storage.writes.lock().unwrap().len(), 2);
}

#[test]
fn test_stores_with_different_keys_are_independent() {
    let storage = Arc::new(InMemoryStorage::new());
    let mut work = AccountStore::with_config(
        storage.clone(),
        StoreConfig::default().with_storage_key("work"),
    );
    let mut home = AccountStore::with_config(
        storage.clone(),
        StoreConfig::default().with_storage_key("home"),
    );
    work.hydrate();
    home.hydrate();

    work.add_empty();
    work.add_empty();
    home.add_empty();

    let mut reread = AccountStore::with_config(
        storage.clone(),
        StoreConfig::default().with_storage_key("work"),
    );
    reread.hydrate();
    assert_eq!(reread.len(), 2);
}

fn storage_value(storage: &InMemoryStorage) -> String {
    use credbook::Storage;
    storage
        .get(STORAGE_KEY)
        .unwrap()
        .expect("accounts should be stored")
}
