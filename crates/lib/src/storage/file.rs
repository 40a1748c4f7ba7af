//! File-backed storage.
//!
//! All keys live in one JSON file. The whole map is held in memory and the file is
//! rewritten on every change, via a sibling temp file and a rename so a crash never
//! leaves a half-written file behind.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use serde::{Deserialize, Deserializer, Serialize};

use super::{Storage, StorageError};
use crate::{Error, Result};

/// The current storage file format version.
/// v0 indicates this is an unstable format subject to breaking changes.
const FILE_FORMAT_VERSION: u8 = 0;

/// Helper to check if version is default (0) for serde skip_serializing_if
fn is_v0(v: &u8) -> bool {
    *v == 0
}

/// Validates the file format version during deserialization.
fn validate_format_version<'de, D>(deserializer: D) -> std::result::Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let version = u8::deserialize(deserializer)?;
    if version != FILE_FORMAT_VERSION {
        return Err(serde::de::Error::custom(format!(
            "unsupported storage file version {version}; only version {FILE_FORMAT_VERSION} is supported"
        )));
    }
    Ok(version)
}

/// On-disk layout of a storage file.
#[derive(Serialize, Deserialize, Default)]
struct StorageFile {
    #[serde(
        rename = "_v",
        default,
        skip_serializing_if = "is_v0",
        deserialize_with = "validate_format_version"
    )]
    version: u8,
    #[serde(default)]
    values: HashMap<String, String>,
}

/// A [`Storage`] persisted to a single JSON file.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    values: RwLock<HashMap<String, String>>,
}

impl FileStorage {
    /// Opens the storage file at `path`.
    ///
    /// A missing file yields an empty storage; the file is created on the first write.
    /// A file that exists but cannot be parsed is an error.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let values = match fs::read_to_string(&path) {
            Ok(json) => {
                let file: StorageFile = serde_json::from_str(&json).map_err(|e| -> Error {
                    StorageError::DeserializationFailed { source: e }.into()
                })?;
                tracing::debug!(
                    path = %path.display(),
                    keys = file.values.len(),
                    "Loaded storage file"
                );
                file.values
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "Storage file not found, starting empty");
                HashMap::new()
            }
            Err(e) => return Err(StorageError::FileIo { source: e }.into()),
        };

        Ok(Self {
            path,
            values: RwLock::new(values),
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self, values: &HashMap<String, String>) -> Result<()> {
        let file = StorageFile {
            version: FILE_FORMAT_VERSION,
            values: values.clone(),
        };
        let json = serde_json::to_string_pretty(&file)
            .map_err(|e| -> Error { StorageError::SerializationFailed { source: e }.into() })?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .map_err(|e| -> Error { StorageError::FileIo { source: e }.into() })?;
        }

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|e| -> Error { StorageError::FileIo { source: e }.into() })?;
        fs::rename(&tmp, &self.path)
            .map_err(|e| -> Error { StorageError::FileIo { source: e }.into() })
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let values = self.values.read().map_err(|_| StorageError::LockPoisoned)?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: String) -> Result<()> {
        let mut values = self.values.write().map_err(|_| StorageError::LockPoisoned)?;
        let mut next = values.clone();
        next.insert(key.to_string(), value);
        self.flush(&next)?;
        *values = next;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut values = self.values.write().map_err(|_| StorageError::LockPoisoned)?;
        if !values.contains_key(key) {
            return Ok(());
        }
        let mut next = values.clone();
        next.remove(key);
        self.flush(&next)?;
        *values = next;
        Ok(())
    }
}
