use crate::modules::timesheet::core::entry::TimeEntry;
use crate::modules::timesheet::core::settings::Settings;
use chrono::NaiveDate;

/// The whole timesheet: the entry collection and the user's settings.
///
/// Entries stay sorted newest date first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TimesheetState {
    pub entries: Vec<TimeEntry>,
    pub settings: Settings,
}

impl TimesheetState {
    pub fn entry_on(&self, date: NaiveDate) -> Option<&TimeEntry> {
        self.entries.iter().find(|entry| entry.date == date)
    }

    pub fn find_entry(&self, time_entry_id: &str) -> Option<&TimeEntry> {
        self.entries.iter().find(|entry| entry.id == time_entry_id)
    }

    pub fn sort_entries(&mut self) {
        self.entries.sort_by(|a, b| {
            b.date
                .cmp(&a.date)
                .then_with(|| b.start_time().cmp(&a.start_time()))
        });
    }
}
