//! Key-value storage
//!
//! The durable collaborator behind the cart snapshot, the search history and
//! the auth blobs: string keys, JSON string values, no transactional
//! guarantees. Callers in this crate tolerate lost writes and treat
//! malformed blobs as absent.

use std::{
    fmt, fs, io,
    path::PathBuf,
    sync::{Mutex, MutexGuard, PoisonError},
};

use rustc_hash::FxHashMap;
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

/// Errors from the store or from blob (de)serialization.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying file I/O failed.
    #[error("storage I/O failed")]
    Io(#[from] io::Error),

    /// A blob could not be serialized or deserialized.
    #[error("storage blob was not valid JSON")]
    Blob(#[from] serde_json::Error),
}

/// String-keyed storage for JSON blobs.
pub trait KeyValueStore: fmt::Debug + Send + Sync {
    /// Fetch the blob stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backend could not be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous blob.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backend could not be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Drop the blob stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backend could not be written.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// Read and decode the JSON blob under `key`.
///
/// A missing key is `Ok(None)`.
///
/// # Errors
///
/// Returns a [`StoreError`] when the backend read fails or the blob is not
/// valid JSON for `T`; hydrating callers downgrade either case to "absent".
pub fn get_json<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<T>, StoreError> {
    match store.get(key)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Encode `value` as JSON and store it under `key`.
///
/// # Errors
///
/// Returns a [`StoreError`] when serialization or the backend write fails.
pub fn set_json<T: Serialize>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StoreError> {
    store.set(key, &serde_json::to_string(value)?)
}

/// Volatile store: the default session backend and the one tests use.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    entries: Mutex<FxHashMap<String, String>>,
}

impl InMemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> MutexGuard<'_, FxHashMap<String, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.entries().remove(key);
        Ok(())
    }
}

/// Durable store keeping every key in one JSON object on disk.
///
/// Each write rewrites the whole file. The file is created on first write;
/// a missing file reads as an empty store.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Open a store backed by the file at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_all(&self) -> Result<FxHashMap<String, String>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(FxHashMap::default()),
            Err(err) => Err(err.into()),
        }
    }

    fn write_all(&self, entries: &FxHashMap<String, String>) -> Result<(), StoreError> {
        fs::write(&self.path, serde_json::to_string(entries)?)?;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read_all()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.read_all()?;
        entries.insert(key.to_owned(), value.to_owned());
        self.write_all(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut entries = self.read_all()?;
        if entries.remove(key).is_some() {
            self.write_all(&entries)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Blob {
        label: String,
        count: u32,
    }

    #[test]
    fn in_memory_set_get_remove() {
        let store = InMemoryStore::new();

        assert_eq!(store.get("missing").ok().flatten(), None);

        store.set("key", "value").ok();
        assert_eq!(store.get("key").ok().flatten(), Some("value".to_owned()));

        store.remove("key").ok();
        assert_eq!(store.get("key").ok().flatten(), None);
    }

    #[test]
    fn json_helpers_round_trip() {
        let store = InMemoryStore::new();
        let blob = Blob {
            label: "bananas".to_owned(),
            count: 3,
        };

        set_json(&store, "blob", &blob).ok();

        let loaded: Option<Blob> = get_json(&store, "blob").ok().flatten();
        assert_eq!(loaded, Some(blob));
    }

    #[test]
    fn get_json_missing_key_is_none() {
        let store = InMemoryStore::new();

        let loaded: Result<Option<Blob>, StoreError> = get_json(&store, "missing");

        assert!(matches!(loaded, Ok(None)));
    }

    #[test]
    fn get_json_malformed_blob_errors() {
        let store = InMemoryStore::new();
        store.set("blob", "not json").ok();

        let loaded: Result<Option<Blob>, StoreError> = get_json(&store, "blob");

        assert!(matches!(loaded, Err(StoreError::Blob(_))));
    }
}
