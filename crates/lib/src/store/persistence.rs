//! Reading and writing the account list through a [`Storage`].
//!
//! Both directions absorb every failure. A read that fails for any reason yields an
//! empty list, and a write that fails is logged and dropped.

use serde_json::Value;

use crate::{account::Account, storage::Storage, validation::is_well_formed};

/// Loads the stored account list under `key`.
///
/// Values that are not well-formed accounts are skipped, as are accounts whose labels
/// do not decode. A missing key, unreadable storage or a value that is not a JSON array
/// all produce an empty list.
pub(crate) fn load_accounts(storage: &dyn Storage, key: &str) -> Vec<Account> {
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            tracing::debug!(key, "No stored accounts");
            return Vec::new();
        }
        Err(e) => {
            tracing::warn!(key, error = %e, "Failed to read stored accounts");
            return Vec::new();
        }
    };

    let items = match serde_json::from_str::<Value>(&raw) {
        Ok(Value::Array(items)) => items,
        Ok(_) => {
            tracing::warn!(key, "Stored accounts are not a JSON array");
            return Vec::new();
        }
        Err(e) => {
            tracing::warn!(key, error = %e, "Stored accounts are not valid JSON");
            return Vec::new();
        }
    };

    items
        .into_iter()
        .filter(|item| is_well_formed(item))
        .filter_map(|item| serde_json::from_value::<Account>(item).ok())
        .collect()
}

/// Writes the full account list under `key`.
pub(crate) fn save_accounts(storage: &dyn Storage, key: &str, accounts: &[Account]) {
    let json = match serde_json::to_string(accounts) {
        Ok(json) => json,
        Err(e) => {
            tracing::warn!(key, error = %e, "Failed to serialize accounts");
            return;
        }
    };

    match storage.set(key, json) {
        Ok(()) => tracing::trace!(key, accounts = accounts.len(), "Persisted accounts"),
        Err(e) => tracing::warn!(key, error = %e, "Failed to persist accounts"),
    }
}
