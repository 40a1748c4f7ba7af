//! Key-value storage port.
//!
//! The account store never talks to a concrete storage; it holds an
//! `Arc<dyn Storage>` and reads or writes whole string values by key. This keeps
//! tests on [`InMemoryStorage`] while the binary uses [`FileStorage`].

use std::fmt::Debug;

use crate::Result;

mod errors;
mod file;
mod in_memory;

pub use errors::StorageError;
pub use file::FileStorage;
pub use in_memory::InMemoryStorage;

/// A string key-value storage.
///
/// Calls are synchronous. Implementations report failures through the returned
/// `Result`; callers decide whether to surface or absorb them.
pub trait Storage: Send + Sync + Debug {
    /// Reads the value stored under `key`, or `None` if the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: String) -> Result<()>;

    /// Removes `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}
