//!
//! Credbook: a local account list manager.
//! This library keeps an ordered list of credential profiles in memory and mirrors
//! every change to a pluggable key-value storage.
//!
//! ## Core Concepts
//!
//! * **Accounts (`account::Account`)**: A credential profile. Either an `LDAP` account, which
//!   never carries a password, or a `LOCAL` account with its own password. Each account has a
//!   login and an ordered list of free-text labels.
//! * **Labels (`labels`)**: Conversion between the `a; b; c` text form users type and the
//!   structured label list stored on an account.
//! * **Validation (`validation`)**: The per-record rules on login length and the coupling between
//!   account type and password.
//! * **Storage (`storage::Storage`)**: A read/write-by-key port. `InMemoryStorage` serves tests and
//!   ephemeral use, `FileStorage` persists to a JSON file.
//! * **AccountStore (`store::AccountStore`)**: The authoritative account list. Hydrates once from
//!   storage, then notifies its observers (persistence among them) after every mutation.

pub mod account;
pub mod constants;
pub mod labels;
pub mod storage;
pub mod store;
pub mod validation;

pub use account::{Account, AccountId, AccountPatch, AccountType, Label};
pub use labels::{format_labels, parse_labels};
pub use storage::{FileStorage, InMemoryStorage, Storage, StorageError};
pub use store::{AccountStore, StoreConfig, SubscriptionId};
pub use validation::{ValidationIssue, is_valid, validate};

/// Result type used throughout the Credbook library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the Credbook library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Structured storage errors from the storage module
    #[error(transparent)]
    Storage(storage::StorageError),

    /// An account type name that is neither `LDAP` nor `LOCAL`.
    #[error("Unknown account type: {0}")]
    UnknownAccountType(String),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Storage(_) => "storage",
            Error::UnknownAccountType(_) => "account",
        }
    }

    /// Check if this error is storage-related.
    pub fn is_storage_error(&self) -> bool {
        matches!(self, Error::Storage(_))
    }

    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        match self {
            Error::Storage(storage_err) => storage_err.is_io_error(),
            _ => false,
        }
    }

    /// Check if this error is serialization related.
    pub fn is_serialization_error(&self) -> bool {
        match self {
            Error::Storage(storage_err) => storage_err.is_serialization_error(),
            _ => false,
        }
    }
}

impl From<storage::StorageError> for Error {
    fn from(err: storage::StorageError) -> Self {
        Error::Storage(err)
    }
}
