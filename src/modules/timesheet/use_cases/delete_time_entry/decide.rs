use crate::modules::timesheet::core::errors::DecideError;
use crate::modules::timesheet::core::events::TimesheetEvent;
use crate::modules::timesheet::core::state::TimesheetState;
use crate::modules::timesheet::use_cases::delete_time_entry::command::DeleteTimeEntry;

pub fn decide_delete_time_entry(
    state: &TimesheetState,
    command: DeleteTimeEntry,
) -> Result<Vec<TimesheetEvent>, DecideError> {
    if state.find_entry(&command.time_entry_id).is_none() {
        return Err(DecideError::EntryNotFound(command.time_entry_id));
    }
    Ok(vec![TimesheetEvent::TimeEntryDeleted {
        time_entry_id: command.time_entry_id,
    }])
}
