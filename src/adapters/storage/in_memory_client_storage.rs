//! In-Memory Client Storage Adapter
//!
//! Keeps every client's namespace in a process-wide map. Data is lost on
//! restart, which is fine for development and tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::ClientId;
use crate::ports::{validate_key, ClientStorage, StorageError};

/// In-memory storage for client records
#[derive(Debug, Clone, Default)]
pub struct InMemoryClientStorage {
    values: Arc<RwLock<HashMap<(ClientId, String), String>>>,
}

impl InMemoryClientStorage {
    /// Create a new in-memory storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all stored data (useful for tests)
    pub async fn clear(&self) {
        self.values.write().await.clear();
    }

    /// Number of stored values across all clients
    pub async fn len(&self) -> usize {
        self.values.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.values.read().await.is_empty()
    }
}

#[async_trait]
impl ClientStorage for InMemoryClientStorage {
    async fn get(&self, client: &ClientId, key: &str) -> Result<Option<String>, StorageError> {
        validate_key(key)?;
        let values = self.values.read().await;
        Ok(values.get(&(*client, key.to_string())).cloned())
    }

    async fn set(&self, client: &ClientId, key: &str, value: String) -> Result<(), StorageError> {
        validate_key(key)?;
        let mut values = self.values.write().await;
        values.insert((*client, key.to_string()), value);
        Ok(())
    }

    async fn remove(&self, client: &ClientId, key: &str) -> Result<(), StorageError> {
        validate_key(key)?;
        self.values.write().await.remove(&(*client, key.to_string()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn set_then_get_returns_value() {
        let storage = InMemoryClientStorage::new();
        let client = ClientId::new();

        storage.set(&client, "pending_proposal", "{}".to_string()).await.unwrap();

        assert_eq!(
            storage.get(&client, "pending_proposal").await.unwrap().as_deref(),
            Some("{}")
        );
    }

    #[tokio::test]
    async fn clients_are_isolated() {
        let storage = InMemoryClientStorage::new();
        let a = ClientId::new();
        let b = ClientId::new();

        storage.set(&a, "milestone", "x".to_string()).await.unwrap();

        assert!(storage.get(&b, "milestone").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn set_overwrites_previous_value() {
        let storage = InMemoryClientStorage::new();
        let client = ClientId::new();

        storage.set(&client, "k", "one".to_string()).await.unwrap();
        storage.set(&client, "k", "two".to_string()).await.unwrap();

        assert_eq!(storage.get(&client, "k").await.unwrap().as_deref(), Some("two"));
        assert_eq!(storage.len().await, 1);
    }

    #[tokio::test]
    async fn remove_is_idempotent() {
        let storage = InMemoryClientStorage::new();
        let client = ClientId::new();

        storage.set(&client, "k", "v".to_string()).await.unwrap();
        storage.remove(&client, "k").await.unwrap();
        storage.remove(&client, "k").await.unwrap();

        assert!(storage.is_empty().await);
    }

    #[tokio::test]
    async fn rejects_invalid_keys() {
        let storage = InMemoryClientStorage::new();
        let err = storage.get(&ClientId::new(), "../x").await.unwrap_err();
        assert!(matches!(err, StorageError::InvalidKey(_)));
    }
}
