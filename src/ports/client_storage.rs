//! ClientStorage port - per-client key/value persistence.
//!
//! Each client (browser tab identity) owns a small namespace of JSON
//! documents addressed by well-known keys. Values are opaque strings at this
//! layer; typing and validation happen in the application's record slots.

use async_trait::async_trait;

use crate::domain::foundation::ClientId;

/// Errors that can occur during client storage operations
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Failed to serialize record: {0}")]
    SerializationFailed(String),

    #[error("IO error: {0}")]
    IoError(String),
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::SerializationFailed(err.to_string())
    }
}

/// Port for a client's key/value namespace
#[async_trait]
pub trait ClientStorage: Send + Sync {
    /// Raw value stored under `key`, or `None` when nothing is there.
    async fn get(&self, client: &ClientId, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    async fn set(&self, client: &ClientId, key: &str, value: String) -> Result<(), StorageError>;

    /// Removes `key`. Removing an absent key succeeds.
    async fn remove(&self, client: &ClientId, key: &str) -> Result<(), StorageError>;
}

/// Keys are used as file names by the file adapter, so keep them simple.
pub fn validate_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}
