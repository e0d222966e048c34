use crate::modules::timesheet::core::history::DownloadHistoryEntry;
use crate::modules::timesheet::core::ports::HistoryRepository;
use crate::modules::timesheet::use_cases::application_error::ApplicationError;
use std::sync::Arc;
use tracing::info;

pub struct DownloadHistoryHandler<THistory>
where
    THistory: HistoryRepository + 'static,
{
    history: Arc<THistory>,
}

impl<THistory> DownloadHistoryHandler<THistory>
where
    THistory: HistoryRepository + 'static,
{
    pub fn new(history: Arc<THistory>) -> Self {
        Self { history }
    }

    pub async fn list(&self) -> Result<Vec<DownloadHistoryEntry>, ApplicationError> {
        Ok(self.history.list().await?)
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApplicationError> {
        self.history.delete(id).await?;
        info!(history_entry_id = id, "download history entry deleted");
        Ok(())
    }

    pub async fn clear(&self) -> Result<(), ApplicationError> {
        self.history.clear().await?;
        info!("download history cleared");
        Ok(())
    }
}
