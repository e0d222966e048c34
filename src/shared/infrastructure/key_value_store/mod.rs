// Key/value storage port, shaped after browser local storage.
//
// Purpose
// - Persist string values under well-known keys without the core knowing where they live.
//
// Boundaries
// - Values are opaque strings here. Encoding and decoding belong to the repositories.

pub mod in_memory;
pub mod json_file;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("backend error: {0}")]
    Backend(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Writes all pairs in one step so a state snapshot never lands half written.
    async fn set_many(&self, pairs: Vec<(String, String)>) -> Result<(), StorageError>;

    async fn remove(&self, key: &str) -> Result<(), StorageError>;

    async fn set(&self, key: &str, value: String) -> Result<(), StorageError> {
        self.set_many(vec![(key.to_string(), value)]).await
    }
}
