// Command data type for adding a time entry.
//
// Purpose
// - Express the user's intent to log one day: a worked shift, a vacation day or a holiday.
//
// Responsibilities
// - Carry already parsed input to the decider.
// - Convert the flat transport input (the form fields) into the command, rejecting malformed times.

use crate::modules::timesheet::core::clock_time::{ClockTime, ParseClockTimeError};
use crate::modules::timesheet::core::entry::Job;
use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayDetails {
    Worked {
        start: ClockTime,
        end: ClockTime,
        pause_minutes: u32,
        location: String,
    },
    Vacation,
    Holiday,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddTimeEntry {
    pub time_entry_id: String,
    pub date: NaiveDate,
    pub job: Job,
    pub details: DayDetails,
}

/// Flat input as the entry form sends it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddTimeEntryInput {
    pub date: NaiveDate,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub pause: u32,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub job: Job,
    #[serde(default)]
    pub is_vacation: bool,
    #[serde(default)]
    pub is_holiday: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidInput {
    #[error("an entry cannot be both a vacation day and a holiday")]
    ConflictingDayFlags,

    #[error("{0} is required for a worked day")]
    MissingTime(&'static str),

    #[error(transparent)]
    InvalidTime(#[from] ParseClockTimeError),
}

impl AddTimeEntryInput {
    pub fn into_command(
        self,
        time_entry_id: impl Into<String>,
    ) -> Result<AddTimeEntry, InvalidInput> {
        let details = match (self.is_vacation, self.is_holiday) {
            (true, true) => return Err(InvalidInput::ConflictingDayFlags),
            (true, false) => DayDetails::Vacation,
            (false, true) => DayDetails::Holiday,
            (false, false) => {
                let start = self
                    .start_time
                    .as_deref()
                    .filter(|value| !value.trim().is_empty())
                    .ok_or(InvalidInput::MissingTime("startTime"))?
                    .parse()?;
                let end = self
                    .end_time
                    .as_deref()
                    .filter(|value| !value.trim().is_empty())
                    .ok_or(InvalidInput::MissingTime("endTime"))?
                    .parse()?;
                DayDetails::Worked {
                    start,
                    end,
                    pause_minutes: self.pause,
                    location: self.location.trim().to_string(),
                }
            }
        };

        Ok(AddTimeEntry {
            time_entry_id: time_entry_id.into(),
            date: self.date,
            job: self.job,
            details,
        })
    }
}
