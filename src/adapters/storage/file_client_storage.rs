//! File-based Client Storage Adapter
//!
//! Stores each value as `<base>/<client_id>/<key>.json`. Organized by client
//! so a single visitor's state can be inspected or wiped by hand.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use uuid::Uuid;

use crate::domain::foundation::ClientId;
use crate::ports::{validate_key, ClientStorage, StorageError};

/// File-based storage for client records
#[derive(Debug, Clone)]
pub struct FileClientStorage {
    base_path: PathBuf,
}

impl FileClientStorage {
    /// Create a new file storage with a base directory
    ///
    /// # Example
    /// ```ignore
    /// let storage = FileClientStorage::new("./data/clients");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Get the directory path for a specific client
    fn client_dir(&self, client: &ClientId) -> PathBuf {
        self.base_path.join(client.to_string())
    }

    fn value_path(&self, client: &ClientId, key: &str) -> PathBuf {
        self.client_dir(client).join(format!("{}.json", key))
    }

    /// Ensure directory exists
    async fn ensure_dir(&self, path: &Path) -> Result<(), StorageError> {
        fs::create_dir_all(path)
            .await
            .map_err(|e| StorageError::IoError(e.to_string()))
    }
}

#[async_trait]
impl ClientStorage for FileClientStorage {
    async fn get(&self, client: &ClientId, key: &str) -> Result<Option<String>, StorageError> {
        validate_key(key)?;
        match fs::read_to_string(self.value_path(client, key)).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::IoError(e.to_string())),
        }
    }

    async fn set(&self, client: &ClientId, key: &str, value: String) -> Result<(), StorageError> {
        validate_key(key)?;
        self.ensure_dir(&self.client_dir(client)).await?;

        // Each writer gets its own temp file; the rename publishes it whole
        let path = self.value_path(client, key);
        let tmp = self
            .client_dir(client)
            .join(format!("{}.{}.tmp", key, Uuid::new_v4().simple()));
        fs::write(&tmp, value)
            .await
            .map_err(|e| StorageError::IoError(e.to_string()))?;
        if let Err(e) = fs::rename(&tmp, &path).await {
            let _ = fs::remove_file(&tmp).await;
            return Err(StorageError::IoError(e.to_string()));
        }

        tracing::trace!(client_id = %client, key, path = %path.display(), "Stored client value");
        Ok(())
    }

    async fn remove(&self, client: &ClientId, key: &str) -> Result<(), StorageError> {
        validate_key(key)?;
        match fs::remove_file(self.value_path(client, key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::IoError(e.to_string())),
        }
    }
}
