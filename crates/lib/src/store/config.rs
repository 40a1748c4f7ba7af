//! Account store configuration.

use crate::constants::STORAGE_KEY;

/// Settings for an [`AccountStore`](super::AccountStore).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Storage key the account list is read from and mirrored to.
    pub storage_key: String,
}

impl StoreConfig {
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_string(),
        }
    }
}
