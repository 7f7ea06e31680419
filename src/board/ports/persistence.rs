//! Key-value persistence port backing the board.

use serde::{Serialize, de::DeserializeOwned};
use std::sync::Arc;
use thiserror::Error;

/// Key under which the ordered project collection is stored.
pub const PROJECTS_KEY: &str = "projects";

/// Key under which the selected project identifier is stored.
pub const SELECTED_PROJECT_KEY: &str = "selectedProjectId";

/// Result type for persistence operations.
pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Durable storage of named textual values.
///
/// Both operations are synchronous from the caller's perspective. A
/// successful `set` means the value survives a process restart.
pub trait KeyValueStore: Send + Sync {
    /// Reads the raw value stored under `key`.
    ///
    /// Returns `None` when nothing has been stored under the key.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::Backend`] when the storage cannot be read.
    fn get(&self, key: &str) -> PersistenceResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::Backend`] when the value cannot be made
    /// durable.
    fn set(&self, key: &str, value: &str) -> PersistenceResult<()>;
}

/// Typed access to a [`KeyValueStore`] using JSON as the interchange format.
pub trait KeyValueStoreExt: KeyValueStore {
    /// Reads and decodes the value under `key`, or returns `default` when
    /// nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::Corrupt`] when the stored text does not
    /// decode into `T`, or backend errors from [`KeyValueStore::get`].
    fn get_or<T: DeserializeOwned>(&self, key: &str, default: T) -> PersistenceResult<T> {
        let Some(raw) = self.get(key)? else {
            return Ok(default);
        };
        serde_json::from_str(&raw).map_err(|err| PersistenceError::Corrupt {
            key: key.to_owned(),
            reason: err.to_string(),
        })
    }

    /// Encodes and stores `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::Serialization`] when encoding fails, or
    /// backend errors from [`KeyValueStore::set`].
    fn set_value<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> PersistenceResult<()> {
        let raw = serde_json::to_string(value).map_err(|err| PersistenceError::Serialization {
            key: key.to_owned(),
            reason: err.to_string(),
        })?;
        self.set(key, &raw)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStoreExt for S {}

/// Errors returned by persistence adapters.
#[derive(Debug, Clone, Error)]
pub enum PersistenceError {
    /// The stored value could not be decoded.
    #[error("stored value for '{key}' is corrupt: {reason}")]
    Corrupt {
        /// Storage key.
        key: String,
        /// Decoder message.
        reason: String,
    },

    /// The value could not be encoded.
    #[error("failed to encode value for '{key}': {reason}")]
    Serialization {
        /// Storage key.
        key: String,
        /// Encoder message.
        reason: String,
    },

    /// The key cannot be used by this adapter.
    #[error("invalid storage key '{0}'")]
    InvalidKey(String),

    /// Storage backend failure.
    #[error("persistence backend error: {0}")]
    Backend(Arc<dyn std::error::Error + Send + Sync>),
}

impl PersistenceError {
    /// Wraps a backend error.
    #[must_use]
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Arc::new(err))
    }
}
