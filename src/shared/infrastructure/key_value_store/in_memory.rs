// In memory implementation of the KeyValueStore port.
//
// Purpose
// - Support handler tests and the `memory` storage mode without touching the disk.

use crate::shared::infrastructure::key_value_store::{KeyValueStore, StorageError};
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryKeyValueStore {
    inner: RwLock<HashMap<String, String>>,
    is_offline: bool,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), StorageError> {
        if self.is_offline {
            return Err(StorageError::Backend("Key value store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl KeyValueStore for InMemoryKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.ensure_online()?;
        Ok(self.inner.read().await.get(key).cloned())
    }

    async fn set_many(&self, pairs: Vec<(String, String)>) -> Result<(), StorageError> {
        self.ensure_online()?;
        self.inner.write().await.extend(pairs);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.ensure_online()?;
        self.inner.write().await.remove(key);
        Ok(())
    }
}
