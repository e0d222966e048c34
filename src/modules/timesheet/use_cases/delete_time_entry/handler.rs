use crate::modules::timesheet::core::ports::TimesheetRepository;
use crate::modules::timesheet::use_cases::application_error::ApplicationError;
use crate::modules::timesheet::use_cases::command_flow;
use crate::modules::timesheet::use_cases::delete_time_entry::command::DeleteTimeEntry;
use crate::modules::timesheet::use_cases::delete_time_entry::decide::decide_delete_time_entry;
use std::sync::Arc;
use tracing::info;

pub struct DeleteTimeEntryHandler<TRepository>
where
    TRepository: TimesheetRepository + 'static,
{
    repository: Arc<TRepository>,
}

impl<TRepository> DeleteTimeEntryHandler<TRepository>
where
    TRepository: TimesheetRepository + 'static,
{
    pub fn new(repository: Arc<TRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, command: DeleteTimeEntry) -> Result<(), ApplicationError> {
        let time_entry_id = command.time_entry_id.clone();
        command_flow::execute(&*self.repository, |state| {
            decide_delete_time_entry(state, command)
        })
        .await?;
        info!(%time_entry_id, "time entry deleted");
        Ok(())
    }
}
