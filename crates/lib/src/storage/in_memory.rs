//! In-memory storage.

use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};

use super::{Storage, StorageError};
use crate::Result;

/// A `HashMap`-backed [`Storage`] that lives only as long as the process.
///
/// It can be switched into an unavailable mode in which every call fails with
/// [`StorageError::Unavailable`], which is how callers exercise their
/// storage-failure paths without touching the file system.
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    values: RwLock<HashMap<String, String>>,
    unavailable: AtomicBool,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent call fail (`true`) or succeed again (`false`).
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable.into());
        }
        Ok(())
    }
}

impl Storage for InMemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.check_available()?;
        let values = self.values.read().map_err(|_| StorageError::LockPoisoned)?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: String) -> Result<()> {
        self.check_available()?;
        let mut values = self.values.write().map_err(|_| StorageError::LockPoisoned)?;
        values.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.check_available()?;
        let mut values = self.values.write().map_err(|_| StorageError::LockPoisoned)?;
        values.remove(key);
        Ok(())
    }
}
