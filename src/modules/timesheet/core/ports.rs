// Ports define what the timesheet needs from the outside world, without implementing it.
//
// Responsibilities
// - TimesheetRepository: load the state snapshot and save it back with an optimistic version check.
// - HistoryRepository: append-only download history with explicit deletion.
//
// Boundaries
// - No concrete input or output here. Adapters implement these traits in the adapters layer.

use crate::modules::timesheet::core::history::DownloadHistoryEntry;
use crate::modules::timesheet::core::state::TimesheetState;
use crate::shared::infrastructure::key_value_store::StorageError;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("version mismatch: expected {expected}, actual {actual}")]
    VersionMismatch { expected: i64, actual: i64 },

    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[derive(Debug, Clone)]
pub struct LoadedTimesheet {
    pub state: TimesheetState,
    pub version: i64,
}

#[async_trait]
pub trait TimesheetRepository: Send + Sync {
    async fn load(&self) -> Result<LoadedTimesheet, RepositoryError>;
    async fn save(
        &self,
        expected_version: i64,
        state: &TimesheetState,
    ) -> Result<(), RepositoryError>;
}

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("download history entry {0} not found")]
    NotFound(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[async_trait]
pub trait HistoryRepository: Send + Sync {
    /// Newest download first.
    async fn list(&self) -> Result<Vec<DownloadHistoryEntry>, HistoryError>;
    async fn append(&self, entry: DownloadHistoryEntry) -> Result<(), HistoryError>;
    async fn delete(&self, id: &str) -> Result<(), HistoryError>;
    async fn clear(&self) -> Result<(), HistoryError>;
}
