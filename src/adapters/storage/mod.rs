//! Storage Adapters
//!
//! Implementations of the ClientStorage port.
//!
//! ## Available Adapters
//!
//! - **FileClientStorage** - One JSON file per client and key on disk
//! - **InMemoryClientStorage** - Stores values in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileClientStorage, InMemoryClientStorage};
//!
//! // Survives restarts
//! let storage = FileClientStorage::new("./data/clients");
//!
//! // Testing: in-memory storage
//! let storage = InMemoryClientStorage::new();
//! ```

mod file_client_storage;
mod in_memory_client_storage;

pub use file_client_storage::FileClientStorage;
pub use in_memory_client_storage::InMemoryClientStorage;
