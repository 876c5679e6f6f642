//! Persistence adapter: one JSON document per logical store key.
//!
//! Stores mirror their full record sequence through this boundary on
//! every mutation. The backend is injected so tests can substitute an
//! in-memory fake for the on-disk implementation.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::{AppError, AppResult};

/// Key-value persistence boundary
pub trait StorageBackend: Send + Sync {
    /// Fetch the document stored under `key`, if any
    fn load(&self, key: &str) -> AppResult<Option<Value>>;

    /// Replace the document stored under `key`
    fn save(&self, key: &str, value: &Value) -> AppResult<()>;

    /// Drop the document stored under `key`; absent keys are a no-op
    fn remove(&self, key: &str) -> AppResult<()>;
}

/// Directory-backed store: `<root>/<key>.json`
pub struct JsonFileBackend {
    root: PathBuf,
}

impl JsonFileBackend {
    /// Open a backend rooted at `root`, creating the directory if needed
    pub fn open(root: impl Into<PathBuf>) -> AppResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    fn document_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl StorageBackend for JsonFileBackend {
    fn load(&self, key: &str) -> AppResult<Option<Value>> {
        match fs::read_to_string(self.document_path(key)) {
            Ok(text) => Ok(Some(serde_json::from_str(&text)?)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&self, key: &str, value: &Value) -> AppResult<()> {
        fs::write(self.document_path(key), serde_json::to_string_pretty(value)?)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        match fs::remove_file(self.document_path(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// In-memory backend for tests and ephemeral sessions
#[derive(Default)]
pub struct MemoryBackend {
    documents: Mutex<HashMap<String, Value>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn load(&self, key: &str) -> AppResult<Option<Value>> {
        let documents = self.documents.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(documents.get(key).cloned())
    }

    fn save(&self, key: &str, value: &Value) -> AppResult<()> {
        let mut documents = self.documents.lock().unwrap_or_else(PoisonError::into_inner);
        documents.insert(key.to_string(), value.clone());
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        let mut documents = self.documents.lock().unwrap_or_else(PoisonError::into_inner);
        documents.remove(key);
        Ok(())
    }
}

/// Load the record sequence stored under `key`, falling back to `seed`
/// when the document is absent or unreadable. An unreadable document is
/// logged and overwritten with the seed; an absent one is seeded and
/// mirrored back only when `persist_seed` is set.
pub(crate) fn load_or_seed<T>(
    backend: &dyn StorageBackend,
    key: &str,
    seed: Vec<T>,
    persist_seed: bool,
) -> AppResult<Vec<T>>
where
    T: Serialize + DeserializeOwned,
{
    let document = match backend.load(key) {
        Ok(document) => document,
        Err(AppError::Serialization(err)) => {
            tracing::warn!(key, error = %err, "unreadable store document, resetting to defaults");
            save_documents(backend, key, &seed)?;
            return Ok(seed);
        }
        Err(err) => return Err(err),
    };

    match document {
        Some(value) => match serde_json::from_value(value) {
            Ok(records) => Ok(records),
            Err(err) => {
                tracing::warn!(key, error = %err, "malformed store document, resetting to defaults");
                save_documents(backend, key, &seed)?;
                Ok(seed)
            }
        },
        None => {
            if persist_seed {
                save_documents(backend, key, &seed)?;
            }
            Ok(seed)
        }
    }
}

/// Mirror a full record sequence to the backend
pub(crate) fn save_documents<T: Serialize>(
    backend: &dyn StorageBackend,
    key: &str,
    records: &[T],
) -> AppResult<()> {
    backend.save(key, &serde_json::to_value(records)?)
}

/// Restore a single persisted record (the session identity), treating
/// unreadable content as absent.
pub(crate) fn load_record<T: DeserializeOwned>(
    backend: &dyn StorageBackend,
    key: &str,
) -> AppResult<Option<T>> {
    let document = match backend.load(key) {
        Ok(document) => document,
        Err(AppError::Serialization(err)) => {
            tracing::warn!(key, error = %err, "unreadable document, ignoring");
            return Ok(None);
        }
        Err(err) => return Err(err),
    };

    match document {
        Some(value) => match serde_json::from_value(value) {
            Ok(record) => Ok(Some(record)),
            Err(err) => {
                tracing::warn!(key, error = %err, "malformed document, ignoring");
                Ok(None)
            }
        },
        None => Ok(None),
    }
}
