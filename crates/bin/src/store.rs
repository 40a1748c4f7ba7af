//! Opening the account store the CLI works on.

use std::path::PathBuf;
use std::sync::Arc;

use credbook::{AccountStore, FileStorage, StoreConfig};

use crate::cli::StoreArgs;

/// File name of the storage file inside the data directory.
pub const STORAGE_FILE: &str = "credbook.json";

/// Path of the storage file for the given arguments.
pub fn storage_path(args: &StoreArgs) -> PathBuf {
    args.data_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(STORAGE_FILE)
}

/// Open the file storage and hydrate a store from it.
pub fn open_store(args: &StoreArgs) -> Result<AccountStore, Box<dyn std::error::Error>> {
    let path = storage_path(args);
    tracing::info!("Using account storage at {}", path.display());

    let storage = FileStorage::open(&path)?;
    let config = StoreConfig::default().with_storage_key(args.storage_key.clone());
    let mut store = AccountStore::with_config(Arc::new(storage), config);
    store.hydrate();
    Ok(store)
}
