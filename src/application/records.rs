//! Typed record slots over the raw `ClientStorage` port.
//!
//! Every persisted record goes through a slot, which is the only place that
//! knows its key, serializes it, and validates it on the way back in. A value
//! that fails to parse or validate is reported as absent, never as a
//! partially-typed record.

use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::domain::dashboard::{CheckoutMarker, Milestone, ProjectStatus};
use crate::domain::foundation::{ClientId, ValidationError};
use crate::domain::proposal::PendingProposal;
use crate::ports::{ClientStorage, StorageError};

/// A record stored under a fixed, well-known key.
pub trait StoredRecord: Serialize + DeserializeOwned + Send + Sync {
    const KEY: &'static str;

    /// Semantic checks beyond what deserialization guarantees.
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

impl StoredRecord for PendingProposal {
    const KEY: &'static str = "pending_proposal";

    fn validate(&self) -> Result<(), ValidationError> {
        PendingProposal::validate(self)
    }
}

impl StoredRecord for CheckoutMarker {
    const KEY: &'static str = "checkout_marker";
}

impl StoredRecord for ProjectStatus {
    const KEY: &'static str = "project_status";
}

impl StoredRecord for Milestone {
    const KEY: &'static str = "milestone";

    fn validate(&self) -> Result<(), ValidationError> {
        Milestone::validate(self)
    }
}

/// `get`/`set`/`clear` for one record type.
pub struct RecordSlot<T> {
    storage: Arc<dyn ClientStorage>,
    _record: PhantomData<fn() -> T>,
}

impl<T> Clone for RecordSlot<T> {
    fn clone(&self) -> Self {
        Self {
            storage: Arc::clone(&self.storage),
            _record: PhantomData,
        }
    }
}

impl<T: StoredRecord> RecordSlot<T> {
    pub fn new(storage: Arc<dyn ClientStorage>) -> Self {
        Self {
            storage,
            _record: PhantomData,
        }
    }

    /// The validated record, or `None` when absent or malformed.
    pub async fn get(&self, client: &ClientId) -> Result<Option<T>, StorageError> {
        let Some(raw) = self.storage.get(client, T::KEY).await? else {
            return Ok(None);
        };

        let record = match serde_json::from_str::<T>(&raw) {
            Ok(record) => record,
            Err(e) => {
                tracing::debug!(client_id = %client, key = T::KEY, error = %e, "Ignoring unreadable record");
                return Ok(None);
            }
        };

        if let Err(e) = record.validate() {
            tracing::debug!(client_id = %client, key = T::KEY, error = %e, "Ignoring invalid record");
            return Ok(None);
        }

        Ok(Some(record))
    }

    /// Replaces whatever is stored under the record's key.
    pub async fn set(&self, client: &ClientId, record: &T) -> Result<(), StorageError> {
        record
            .validate()
            .map_err(|e| StorageError::SerializationFailed(e.to_string()))?;
        let json = serde_json::to_string(record)?;
        self.storage.set(client, T::KEY, json).await
    }

    pub async fn clear(&self, client: &ClientId) -> Result<(), StorageError> {
        self.storage.remove(client, T::KEY).await
    }
}

impl<T: StoredRecord + Default> RecordSlot<T> {
    /// The stored record, or the type's default when absent or malformed.
    pub async fn get_or_default(&self, client: &ClientId) -> Result<T, StorageError> {
        Ok(self.get(client).await?.unwrap_or_default())
    }
}

/// Per-client async locks for read-modify-write sequences.
///
/// Storage backends only promise atomic single-key writes. Anything that
/// reads a record and writes based on what it saw holds the client's lock.
#[derive(Clone, Default)]
pub struct ClientLocks {
    inner: Arc<Mutex<HashMap<ClientId, Arc<Mutex<()>>>>>,
}

impl ClientLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits for exclusive access to `client`'s records.
    pub async fn lock(&self, client: &ClientId) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.inner.lock().await;
            // Entries only the map still references are idle
            locks.retain(|_, lock| Arc::strong_count(lock) > 1);
            Arc::clone(locks.entry(*client).or_default())
        };
        lock.lock_owned().await
    }
}

/// All slots the application uses, built over one storage backend.
///
/// Clones share the same locks, so build one per backend and clone it.
#[derive(Clone)]
pub struct ClientRecords {
    pub proposals: RecordSlot<PendingProposal>,
    pub checkout_markers: RecordSlot<CheckoutMarker>,
    pub project_statuses: RecordSlot<ProjectStatus>,
    pub milestones: RecordSlot<Milestone>,
    pub locks: ClientLocks,
}

impl ClientRecords {
    pub fn new(storage: Arc<dyn ClientStorage>) -> Self {
        Self {
            proposals: RecordSlot::new(Arc::clone(&storage)),
            checkout_markers: RecordSlot::new(Arc::clone(&storage)),
            project_statuses: RecordSlot::new(Arc::clone(&storage)),
            milestones: RecordSlot::new(storage),
            locks: ClientLocks::new(),
        }
    }
}
