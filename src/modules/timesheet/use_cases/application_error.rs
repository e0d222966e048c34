use crate::modules::timesheet::core::errors::DecideError;
use crate::modules::timesheet::core::ports::{HistoryError, RepositoryError};
use crate::modules::timesheet::use_cases::export_timesheet::exporter_port::ExportError;
use crate::modules::timesheet::use_cases::suggest_location::suggester_port::SuggestionError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("domain rejected: {0}")]
    Domain(#[from] DecideError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    History(#[from] HistoryError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error(transparent)]
    Suggestion(#[from] SuggestionError),
}
