// HistoryRepository over the key/value store, kept under the `download-history` key.
//
// Responsibilities
// - Serialize read-modify-write cycles so concurrent appends are not lost.
// - Skip stored snapshots that can no longer be decoded instead of failing the whole list.

use crate::modules::timesheet::core::history::DownloadHistoryEntry;
use crate::modules::timesheet::core::ports::{HistoryError, HistoryRepository};
use crate::shared::infrastructure::key_value_store::{KeyValueStore, StorageError};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::warn;

pub const DOWNLOAD_HISTORY_KEY: &str = "download-history";

pub struct KeyValueHistoryRepository {
    store: Arc<dyn KeyValueStore>,
    write_lock: Mutex<()>,
}

impl KeyValueHistoryRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    async fn read_all(&self) -> Result<Vec<DownloadHistoryEntry>, StorageError> {
        let Some(raw) = self.store.get(DOWNLOAD_HISTORY_KEY).await? else {
            return Ok(Vec::new());
        };
        let values = match serde_json::from_str::<Vec<serde_json::Value>>(&raw) {
            Ok(values) => values,
            Err(error) => {
                warn!(
                    key = DOWNLOAD_HISTORY_KEY,
                    %error,
                    "saved history is unreadable, ignoring it"
                );
                return Ok(Vec::new());
            }
        };
        Ok(values
            .into_iter()
            .filter_map(|value| {
                serde_json::from_value::<DownloadHistoryEntry>(value)
                    .inspect_err(|error| {
                        warn!(key = DOWNLOAD_HISTORY_KEY, %error, "skipping saved history entry")
                    })
                    .ok()
            })
            .collect())
    }

    async fn write_all(&self, entries: &[DownloadHistoryEntry]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(entries)
            .map_err(|error| StorageError::Serialization(error.to_string()))?;
        self.store.set(DOWNLOAD_HISTORY_KEY, raw).await
    }
}

#[async_trait::async_trait]
impl HistoryRepository for KeyValueHistoryRepository {
    async fn list(&self) -> Result<Vec<DownloadHistoryEntry>, HistoryError> {
        let mut entries = self.read_all().await?;
        entries.sort_by(|a, b| b.download_date.cmp(&a.download_date));
        Ok(entries)
    }

    async fn append(&self, entry: DownloadHistoryEntry) -> Result<(), HistoryError> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.read_all().await?;
        entries.push(entry);
        self.write_all(&entries).await?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), HistoryError> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.read_all().await?;
        let position = entries
            .iter()
            .position(|entry| entry.id == id)
            .ok_or_else(|| HistoryError::NotFound(id.to_string()))?;
        entries.remove(position);
        self.write_all(&entries).await?;
        Ok(())
    }

    async fn clear(&self) -> Result<(), HistoryError> {
        let _guard = self.write_lock.lock().await;
        self.store.remove(DOWNLOAD_HISTORY_KEY).await?;
        Ok(())
    }
}
