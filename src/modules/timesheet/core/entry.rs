// TimeEntry is one logged day: a worked shift or a special day.
//
// Purpose
// - Special days are variants of their own and never carry start or end times.
// - Keep the derived hours next to the entry; they are computed whenever an entry is built and never read back from storage.
//
// Notes
// - Entries travel as `TimeEntryRecord`, the flat camelCase shape the saved state has always used.

use crate::modules::timesheet::core::clock_time::{ClockTime, ParseClockTimeError};
use crate::modules::timesheet::core::hours::{WorkedHours, calculate_hours};
use crate::modules::timesheet::core::settings::Language;
use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which of the two tracked employments an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Job {
    #[default]
    Job1,
    Job2,
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Job::Job1 => f.write_str("job1"),
            Job::Job2 => f.write_str("job2"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKind {
    Ordinary {
        start: ClockTime,
        end: ClockTime,
        pause_minutes: u32,
    },
    Vacation,
    Holiday,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "TimeEntryRecord", try_from = "TimeEntryRecord")]
pub struct TimeEntry {
    pub id: String,
    pub date: NaiveDate,
    pub job: Job,
    pub location: String,
    pub kind: EntryKind,
    pub hours: WorkedHours,
}

impl TimeEntry {
    pub fn ordinary(
        id: impl Into<String>,
        date: NaiveDate,
        job: Job,
        start: ClockTime,
        end: ClockTime,
        pause_minutes: u32,
        location: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            date,
            job,
            location: location.into(),
            kind: EntryKind::Ordinary {
                start,
                end,
                pause_minutes,
            },
            hours: calculate_hours(start, end, pause_minutes),
        }
    }

    pub fn vacation(id: impl Into<String>, date: NaiveDate, job: Job, language: Language) -> Self {
        Self::special(id, date, job, EntryKind::Vacation, language.vacation_label())
    }

    pub fn holiday(id: impl Into<String>, date: NaiveDate, job: Job, language: Language) -> Self {
        Self::special(id, date, job, EntryKind::Holiday, language.holiday_label())
    }

    fn special(
        id: impl Into<String>,
        date: NaiveDate,
        job: Job,
        kind: EntryKind,
        label: &str,
    ) -> Self {
        Self {
            id: id.into(),
            date,
            job,
            location: label.to_string(),
            kind,
            hours: WorkedHours::ZERO,
        }
    }

    pub fn is_vacation(&self) -> bool {
        matches!(self.kind, EntryKind::Vacation)
    }

    pub fn is_holiday(&self) -> bool {
        matches!(self.kind, EntryKind::Holiday)
    }

    pub fn start_time(&self) -> Option<ClockTime> {
        match self.kind {
            EntryKind::Ordinary { start, .. } => Some(start),
            _ => None,
        }
    }

    pub fn end_time(&self) -> Option<ClockTime> {
        match self.kind {
            EntryKind::Ordinary { end, .. } => Some(end),
            _ => None,
        }
    }

    pub fn pause_minutes(&self) -> u32 {
        match self.kind {
            EntryKind::Ordinary { pause_minutes, .. } => pause_minutes,
            _ => 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntryRecord {
    pub id: String,
    pub date: String,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
    #[serde(default)]
    pub pause: u32,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub job: Job,
    #[serde(default)]
    pub total_hours: f64,
    #[serde(default)]
    pub overtime_hours: f64,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_vacation: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_holiday: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimeEntryRecordError {
    #[error("invalid entry date '{0}'")]
    InvalidDate(String),

    #[error(transparent)]
    InvalidTime(#[from] ParseClockTimeError),
}

/// Accepts a plain `YYYY-MM-DD` date or a full RFC 3339 timestamp, read in local time.
pub fn parse_entry_date(raw: &str) -> Result<NaiveDate, TimeEntryRecordError> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|timestamp| timestamp.with_timezone(&Local).date_naive())
        .map_err(|_| TimeEntryRecordError::InvalidDate(raw.to_string()))
}

impl From<TimeEntry> for TimeEntryRecord {
    fn from(entry: TimeEntry) -> Self {
        let format_time = |time: Option<ClockTime>| time.map(|t| t.to_string()).unwrap_or_default();
        Self {
            start_time: format_time(entry.start_time()),
            end_time: format_time(entry.end_time()),
            pause: entry.pause_minutes(),
            is_vacation: entry.is_vacation(),
            is_holiday: entry.is_holiday(),
            total_hours: entry.hours.total_hours,
            overtime_hours: entry.hours.overtime_hours,
            id: entry.id,
            date: entry.date.format("%Y-%m-%d").to_string(),
            location: entry.location,
            job: entry.job,
        }
    }
}

impl TryFrom<TimeEntryRecord> for TimeEntry {
    type Error = TimeEntryRecordError;

    // Derived hours are recomputed rather than trusted.
    fn try_from(record: TimeEntryRecord) -> Result<Self, Self::Error> {
        let date = parse_entry_date(&record.date)?;
        let special = |kind: EntryKind| Self {
            id: record.id.clone(),
            date,
            job: record.job,
            location: record.location.clone(),
            kind,
            hours: WorkedHours::ZERO,
        };
        if record.is_vacation {
            return Ok(special(EntryKind::Vacation));
        }
        if record.is_holiday {
            return Ok(special(EntryKind::Holiday));
        }

        let start = record.start_time.parse()?;
        let end = record.end_time.parse()?;
        Ok(TimeEntry::ordinary(
            record.id,
            date,
            record.job,
            start,
            end,
            record.pause,
            record.location,
        ))
    }
}
