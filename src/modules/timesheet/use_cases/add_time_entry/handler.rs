use crate::modules::timesheet::core::entry::TimeEntry;
use crate::modules::timesheet::core::errors::DecideError;
use crate::modules::timesheet::core::ports::TimesheetRepository;
use crate::modules::timesheet::use_cases::add_time_entry::command::AddTimeEntry;
use crate::modules::timesheet::use_cases::add_time_entry::decide::decide_add_time_entry;
use crate::modules::timesheet::use_cases::application_error::ApplicationError;
use crate::modules::timesheet::use_cases::command_flow;
use std::sync::Arc;
use tracing::info;

pub struct AddTimeEntryHandler<TRepository>
where
    TRepository: TimesheetRepository + 'static,
{
    repository: Arc<TRepository>,
}

impl<TRepository> AddTimeEntryHandler<TRepository>
where
    TRepository: TimesheetRepository + 'static,
{
    pub fn new(repository: Arc<TRepository>) -> Self {
        Self { repository }
    }

    /// Returns the stored entry with its derived hours.
    pub async fn handle(&self, command: AddTimeEntry) -> Result<TimeEntry, ApplicationError> {
        let time_entry_id = command.time_entry_id.clone();
        let outcome = command_flow::execute(&*self.repository, |state| {
            decide_add_time_entry(state, command)
        })
        .await?;

        let entry = outcome
            .state
            .find_entry(&time_entry_id)
            .cloned()
            .ok_or(DecideError::EntryNotFound(time_entry_id))?;
        info!(time_entry_id = %entry.id, date = %entry.date, job = %entry.job, "time entry added");
        Ok(entry)
    }
}
