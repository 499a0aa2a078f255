//! Storage
//!
//! The key-value persistence seam behind the cart and wishlist stores.
//!
//! Stores serialize their full state into a versioned JSON envelope after
//! every effective mutation and rehydrate once at construction. Per the
//! recovery contract, nothing here surfaces errors to store callers: write
//! failures are logged and swallowed, and an absent, unreadable or
//! wrong-version blob hydrates to an empty state.

use std::{cell::RefCell, fs, io, path::PathBuf};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::{debug, warn};

/// Version written into every persisted envelope. A blob carrying any other
/// version is treated as corrupt rather than migrated.
const SCHEMA_VERSION: u32 = 1;

/// Storage access errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// IO error reading or writing a persisted value
    #[error("Failed to access persisted value: {0}")]
    Io(#[from] io::Error),
}

/// Key-value persistence collaborator.
///
/// Implementations take `&self`; stores hold a shared borrow for the session
/// lifetime, so mutation happens behind interior mutability where needed.
pub trait KeyValueStore {
    /// Read the serialized value for a key, `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if the backing medium cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write the serialized value for a key, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if the backing medium cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory store, the session sandbox equivalent.
///
/// Two stores hydrated from the same `MemoryStore` see each other's writes,
/// which makes it the natural backend for tests and single-process demos.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<FxHashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());

        Ok(())
    }
}

/// File-backed store keeping one JSON file per key under a base directory.
#[derive(Debug)]
pub struct FileStore {
    base_path: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `base_path`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if the directory cannot be created.
    pub fn new(base_path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let base_path = base_path.into();

        fs::create_dir_all(&base_path)?;

        Ok(Self { base_path })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.base_path.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StorageError::Io(err)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::write(self.path_for(key), value)?;

        Ok(())
    }
}

/// Versioned wrapper around a persisted entry list.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    version: u32,
    entries: Vec<T>,
}

// The envelope owns its entries on the way in but only borrows them on the
// way out; a serialize-only shape avoids cloning every entry per write.
#[derive(Debug, Serialize)]
struct BorrowedEnvelope<'a, T> {
    version: u32,
    entries: &'a [T],
}

/// Serialize `entries` under `key`, swallowing any failure.
///
/// Persistence is fire-and-forget: a failed write is logged and the in-memory
/// state stays authoritative for the rest of the session.
pub(crate) fn persist<T: Serialize>(store: &dyn KeyValueStore, key: &str, entries: &[T]) {
    let envelope = BorrowedEnvelope {
        version: SCHEMA_VERSION,
        entries,
    };

    let serialized = match serde_json::to_string(&envelope) {
        Ok(serialized) => serialized,
        Err(err) => {
            warn!(key, "failed to serialize state for persistence: {err}");
            return;
        }
    };

    if let Err(err) = store.set(key, &serialized) {
        warn!(key, "failed to persist state: {err}");
    }
}

/// Rehydrate the entry list persisted under `key`.
///
/// Absent data yields an empty list silently; unreadable, unparsable or
/// wrong-version data yields an empty list with a warning.
pub(crate) fn hydrate<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Vec<T> {
    let serialized = match store.get(key) {
        Ok(Some(serialized)) => serialized,
        Ok(None) => {
            debug!(key, "no persisted state found, starting empty");
            return Vec::new();
        }
        Err(err) => {
            warn!(key, "failed to read persisted state, starting empty: {err}");
            return Vec::new();
        }
    };

    match serde_json::from_str::<Envelope<T>>(&serialized) {
        Ok(envelope) if envelope.version == SCHEMA_VERSION => envelope.entries,
        Ok(envelope) => {
            warn!(
                key,
                version = envelope.version,
                "unsupported persisted schema version, starting empty"
            );
            Vec::new()
        }
        Err(err) => {
            warn!(key, "failed to parse persisted state, starting empty: {err}");
            Vec::new()
        }
    }
}
