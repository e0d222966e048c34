use crate::modules::timesheet::core::events::TimesheetEvent;
use crate::modules::timesheet::core::state::TimesheetState;

pub fn evolve(mut state: TimesheetState, event: TimesheetEvent) -> TimesheetState {
    match event {
        TimesheetEvent::TimeEntryAdded(entry) => {
            state.entries.push(entry);
            state.sort_entries();
        }
        TimesheetEvent::TimeEntryDeleted { time_entry_id } => {
            state.entries.retain(|entry| entry.id != time_entry_id);
        }
        TimesheetEvent::UserNameSet { user_name } => state.settings.user_name = user_name,
        TimesheetEvent::OvertimeOptionSet { overtime_option } => {
            state.settings.overtime_option = overtime_option
        }
        TimesheetEvent::CarryOverSet {
            vacation_days,
            overtime_hours,
        } => {
            if let Some(days) = vacation_days {
                state.settings.carry_over.vacation_days = days;
            }
            if let Some(hours) = overtime_hours {
                state.settings.carry_over.overtime_hours = hours;
            }
        }
        TimesheetEvent::LanguageSet { language } => state.settings.language = language,
    }
    state
}
