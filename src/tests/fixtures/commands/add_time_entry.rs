// Shared test fixture for the add-time-entry input.
// Starts from the worked day in json/add_time_entry.json; setters override single fields.

use crate::modules::timesheet::core::entry::Job;
use crate::modules::timesheet::use_cases::add_time_entry::command::AddTimeEntryInput;
use chrono::NaiveDate;

const ADD_TIME_ENTRY_JSON: &str = include_str!("json/add_time_entry.json");

pub struct AddTimeEntryInputBuilder {
    inner: AddTimeEntryInput,
}

impl Default for AddTimeEntryInputBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl AddTimeEntryInputBuilder {
    pub fn new() -> Self {
        Self {
            inner: serde_json::from_str(ADD_TIME_ENTRY_JSON).unwrap(),
        }
    }

    pub fn date(mut self, v: &str) -> Self {
        self.inner.date = NaiveDate::parse_from_str(v, "%Y-%m-%d").unwrap();
        self
    }

    pub fn start_time(mut self, v: impl Into<String>) -> Self {
        self.inner.start_time = Some(v.into());
        self
    }

    pub fn end_time(mut self, v: impl Into<String>) -> Self {
        self.inner.end_time = Some(v.into());
        self
    }

    pub fn pause(mut self, v: u32) -> Self {
        self.inner.pause = v;
        self
    }

    pub fn location(mut self, v: impl Into<String>) -> Self {
        self.inner.location = v.into();
        self
    }

    pub fn job(mut self, v: Job) -> Self {
        self.inner.job = v;
        self
    }

    pub fn vacation(mut self) -> Self {
        self.inner.is_vacation = true;
        self
    }

    pub fn holiday(mut self) -> Self {
        self.inner.is_holiday = true;
        self
    }

    pub fn build(self) -> AddTimeEntryInput {
        self.inner
    }
}

#[cfg(test)]
mod add_time_entry_input_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = AddTimeEntryInputBuilder::default().build();
        assert_eq!(built.date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(built.start_time.as_deref(), Some("07:00"));
        assert_eq!(built.end_time.as_deref(), Some("16:00"));
        assert_eq!(built.pause, 60);
        assert_eq!(built.location, "Main Office");
        assert_eq!(built.job, Job::Job1);
        assert!(!built.is_vacation);
        assert!(!built.is_holiday);
    }

    #[rstest]
    fn setters_override_fields() {
        let built = AddTimeEntryInputBuilder::new()
            .date("2024-03-04")
            .start_time("22:00")
            .end_time("06:00")
            .pause(30)
            .location("Warehouse")
            .job(Job::Job2)
            .build();

        assert_eq!(built.date, NaiveDate::from_ymd_opt(2024, 3, 4).unwrap());
        assert_eq!(built.start_time.as_deref(), Some("22:00"));
        assert_eq!(built.end_time.as_deref(), Some("06:00"));
        assert_eq!(built.pause, 30);
        assert_eq!(built.location, "Warehouse");
        assert_eq!(built.job, Job::Job2);
    }
}
