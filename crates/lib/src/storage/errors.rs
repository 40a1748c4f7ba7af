//! Storage error types.

use thiserror::Error;

/// Errors that can occur while reading or writing storage.
///
/// # Stability
///
/// - New variants may be added in minor versions (enum is `#[non_exhaustive]`)
/// - Helper methods like `is_*()` provide stable APIs
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum StorageError {
    /// The storage cannot be reached at all.
    #[error("Storage unavailable")]
    Unavailable,

    /// Serialization failed.
    #[error("Serialization failed")]
    SerializationFailed {
        /// The underlying serialization error
        #[source]
        source: serde_json::Error,
    },

    /// Deserialization failed.
    #[error("Deserialization failed")]
    DeserializationFailed {
        /// The underlying deserialization error
        #[source]
        source: serde_json::Error,
    },

    /// File I/O error.
    #[error("File I/O error")]
    FileIo {
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A lock guarding storage state was poisoned by a panicking writer.
    #[error("Storage lock poisoned")]
    LockPoisoned,
}

impl StorageError {
    /// Check if this error means storage could not be reached.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, StorageError::Unavailable | StorageError::LockPoisoned)
    }

    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        matches!(self, StorageError::FileIo { .. })
    }

    /// Check if this error is related to (de)serialization.
    pub fn is_serialization_error(&self) -> bool {
        matches!(
            self,
            StorageError::SerializationFailed { .. } | StorageError::DeserializationFailed { .. }
        )
    }
}
