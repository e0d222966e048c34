use crate::modules::timesheet::core::ports::{HistoryRepository, TimesheetRepository};
use crate::modules::timesheet::use_cases::application_error::ApplicationError;
use crate::modules::timesheet::use_cases::export_timesheet::command::{
    ExportAction, ExportTimesheet,
};
use crate::modules::timesheet::use_cases::export_timesheet::decide::decide_export;
use crate::modules::timesheet::use_cases::export_timesheet::exporter_port::{
    ExportArtifact, ExportRequest, TimesheetExporter,
};
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq)]
pub enum ExportOutcome {
    Download(ExportArtifact),
    Share {
        title: String,
        text: String,
        artifact: ExportArtifact,
    },
}

pub struct ExportTimesheetHandler<TRepository, THistory>
where
    TRepository: TimesheetRepository + 'static,
    THistory: HistoryRepository + 'static,
{
    repository: Arc<TRepository>,
    history: Arc<THistory>,
    exporter: Arc<dyn TimesheetExporter>,
}

impl<TRepository, THistory> ExportTimesheetHandler<TRepository, THistory>
where
    TRepository: TimesheetRepository + 'static,
    THistory: HistoryRepository + 'static,
{
    pub fn new(
        repository: Arc<TRepository>,
        history: Arc<THistory>,
        exporter: Arc<dyn TimesheetExporter>,
    ) -> Self {
        Self {
            repository,
            history,
            exporter,
        }
    }

    pub async fn handle(
        &self,
        command: ExportTimesheet,
    ) -> Result<ExportOutcome, ApplicationError> {
        let state = self.repository.load().await?.state;
        let snapshot = decide_export(&state, &command)?;
        let request = ExportRequest {
            user_name: snapshot.user_name.clone(),
            month_name: snapshot.month_name.clone(),
            entries: snapshot.entries.clone(),
            monthly_summary: snapshot.monthly_summary,
            overtime_option: snapshot.overtime_option,
        };

        // A failed history write does not fail the export.
        let history_entry_id = snapshot.id.clone();
        if let Err(error) = self.history.append(snapshot).await {
            warn!(%history_entry_id, %error, "failed to record download history");
        }

        let artifact = self.exporter.render(&request).await?;
        info!(
            month = %command.period,
            action = ?command.action,
            file_name = %artifact.file_name,
            "timesheet exported"
        );

        Ok(match command.action {
            ExportAction::Download => ExportOutcome::Download(artifact),
            ExportAction::Share => ExportOutcome::Share {
                title: format!("Timesheet for {}", request.month_name),
                text: format!(
                    "Monthly timesheet for {} for {}.",
                    request.user_name, request.month_name
                ),
                artifact,
            },
        })
    }
}
