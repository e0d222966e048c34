// Port for rendering a month report into a file.
//
// Boundaries
// - The exporter only formats what it is given. Month selection and history recording stay in the handler.

use crate::modules::timesheet::core::entry::TimeEntry;
use crate::modules::timesheet::core::settings::OvertimeOption;
use crate::modules::timesheet::core::summary::MonthlySummary;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub struct ExportRequest {
    pub user_name: String,
    pub month_name: String,
    /// Oldest date first.
    pub entries: Vec<TimeEntry>,
    pub monthly_summary: MonthlySummary,
    pub overtime_option: OvertimeOption,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub file_name: String,
    pub content_type: String,
    pub content: Vec<u8>,
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to render the report: {0}")]
    Render(String),
}

#[async_trait]
pub trait TimesheetExporter: Send + Sync {
    async fn render(&self, request: &ExportRequest) -> Result<ExportArtifact, ExportError>;
}
