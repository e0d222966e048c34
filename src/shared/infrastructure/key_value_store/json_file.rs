// JSON file implementation of the KeyValueStore port.
//
// Purpose
// - Keep every key in one JSON object on disk, the local equivalent of browser local storage.
//
// Responsibilities
// - Read the file once when opened. A missing or unreadable file means "no saved state".
// - Rewrite the whole file after every change through a temporary file and a rename.

use crate::shared::infrastructure::key_value_store::{KeyValueStore, StorageError};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;
use tracing::{debug, warn};

pub struct JsonFileKeyValueStore {
    path: PathBuf,
    values: RwLock<BTreeMap<String, String>>,
}

impl JsonFileKeyValueStore {
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let values = match tokio::fs::read_to_string(&path).await {
            Ok(content) => match serde_json::from_str::<BTreeMap<String, String>>(&content) {
                Ok(values) => values,
                Err(error) => {
                    warn!(
                        path = %path.display(),
                        %error,
                        "saved state is unreadable, starting empty"
                    );
                    BTreeMap::new()
                }
            },
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no saved state found");
                BTreeMap::new()
            }
            Err(error) => return Err(StorageError::Backend(error.to_string())),
        };

        Ok(Self {
            path,
            values: RwLock::new(values),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn flush(&self, values: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let content = serde_json::to_string_pretty(values)
            .map_err(|error| StorageError::Serialization(error.to_string()))?;
        let temporary = self.path.with_extension("json.tmp");
        tokio::fs::write(&temporary, content)
            .await
            .map_err(|error| StorageError::Backend(error.to_string()))?;
        tokio::fs::rename(&temporary, &self.path)
            .await
            .map_err(|error| StorageError::Backend(error.to_string()))
    }
}

#[async_trait::async_trait]
impl KeyValueStore for JsonFileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn set_many(&self, pairs: Vec<(String, String)>) -> Result<(), StorageError> {
        let mut guard = self.values.write().await;
        let mut next = guard.clone();
        next.extend(pairs);
        self.flush(&next).await?;
        *guard = next;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut guard = self.values.write().await;
        if !guard.contains_key(key) {
            return Ok(());
        }
        let mut next = guard.clone();
        next.remove(key);
        self.flush(&next).await?;
        *guard = next;
        Ok(())
    }
}
