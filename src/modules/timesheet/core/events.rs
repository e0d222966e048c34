use crate::modules::timesheet::core::entry::TimeEntry;
use crate::modules::timesheet::core::settings::{Language, OvertimeOption};

#[derive(Debug, Clone, PartialEq)]
pub enum TimesheetEvent {
    TimeEntryAdded(TimeEntry),
    TimeEntryDeleted {
        time_entry_id: String,
    },
    UserNameSet {
        user_name: String,
    },
    OvertimeOptionSet {
        overtime_option: OvertimeOption,
    },
    CarryOverSet {
        vacation_days: Option<f64>,
        overtime_hours: Option<f64>,
    },
    LanguageSet {
        language: Language,
    },
}
