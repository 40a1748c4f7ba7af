//! Shared helpers for the integration tests.

use std::sync::{Arc, Mutex};

use credbook::{
    Account, AccountId, AccountStore, AccountType, FileStorage, InMemoryStorage, Label, Result,
    Storage, StorageError, constants::STORAGE_KEY,
};

/// Creates a hydrated store over fresh in-memory storage.
pub fn memory_store() -> (Arc<InMemoryStorage>, AccountStore) {
    let storage = Arc::new(InMemoryStorage::new());
    let mut store = AccountStore::new(storage.clone());
    store.hydrate();
    (storage, store)
}

/// Opens a hydrated store over the given file storage path.
pub fn file_store(path: &std::path::Path) -> AccountStore {
    let storage = Arc::new(FileStorage::open(path).expect("Failed to open file storage"));
    let mut store = AccountStore::new(storage);
    store.hydrate();
    store
}

/// Builds a valid LOCAL account.
pub fn local_account(id: &str, login: &str, password: &str) -> Account {
    Account {
        id: AccountId::from(id),
        kind: AccountType::Local,
        login: login.to_string(),
        password: Some(password.to_string()),
        labels: vec![Label::new("local")],
    }
}

/// Builds a valid LDAP account.
pub fn ldap_account(id: &str, login: &str) -> Account {
    Account {
        id: AccountId::from(id),
        kind: AccountType::Ldap,
        login: login.to_string(),
        password: None,
        labels: vec![Label::new("corp"), Label::new("vpn")],
    }
}

/// Writes raw JSON under the default accounts key.
pub fn seed_raw(storage: &dyn Storage, json: &str) {
    storage
        .set(STORAGE_KEY, json.to_string())
        .expect("Failed to seed storage");
}

/// A storage that records every write and can be told to fail.
#[derive(Debug, Default)]
pub struct RecordingStorage {
    pub writes: Mutex<Vec<String>>,
    pub fail_reads: bool,
    pub fail_writes: bool,
}

impl Storage for RecordingStorage {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        if self.fail_reads {
            return Err(StorageError::Unavailable.into());
        }
        Ok(self.writes.lock().unwrap().last().cloned())
    }

    fn set(&self, _key: &str, value: String) -> Result<()> {
        if self.fail_writes {
            return Err(StorageError::Unavailable.into());
        }
        self.writes.lock().unwrap().push(value);
        Ok(())
    }

    fn remove(&self, _key: &str) -> Result<()> {
        self.writes.lock().unwrap().clear();
        Ok(())
    }
}
