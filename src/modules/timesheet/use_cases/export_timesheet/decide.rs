use crate::modules::timesheet::core::errors::DecideError;
use crate::modules::timesheet::core::history::DownloadHistoryEntry;
use crate::modules::timesheet::core::state::TimesheetState;
use crate::modules::timesheet::core::summary::{entries_in_month, monthly_summary};
use crate::modules::timesheet::use_cases::export_timesheet::command::ExportTimesheet;

/// Freezes what the export will contain. Nothing in the timesheet changes.
pub fn decide_export(
    state: &TimesheetState,
    command: &ExportTimesheet,
) -> Result<DownloadHistoryEntry, DecideError> {
    if !state.settings.has_user_name() {
        return Err(DecideError::MissingUserName);
    }

    let month_name = command.period.label();
    let mut entries = entries_in_month(&state.entries, command.period, command.job);
    if entries.is_empty() {
        return Err(DecideError::NothingToExport(month_name));
    }
    entries.sort_by(|a, b| {
        a.date
            .cmp(&b.date)
            .then_with(|| a.start_time().cmp(&b.start_time()))
    });

    Ok(DownloadHistoryEntry {
        id: command.history_entry_id.clone(),
        user_name: state.settings.user_name.trim().to_string(),
        month_name,
        download_date: command.requested_at,
        entries,
        monthly_summary: monthly_summary(&state.entries, command.period, command.job),
        overtime_option: state.settings.overtime_option,
        job: command.job,
    })
}
