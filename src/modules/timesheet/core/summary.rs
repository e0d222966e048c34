// Monthly and yearly rollups over the entry collection.
//
// Boundaries
// - Pure functions over a slice of entries. Nothing here is stored; every read recomputes.

use crate::modules::timesheet::core::entry::{EntryKind, Job, TimeEntry};
use crate::modules::timesheet::core::period::MonthPeriod;
use crate::modules::timesheet::core::settings::CarryOver;
use chrono::Datelike;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySummary {
    pub total_work_hours: f64,
    pub total_overtime: f64,
    /// Minutes.
    pub total_pause: u32,
    pub vacation_days: u32,
    pub holiday_days: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlySummary {
    pub total_overtime: f64,
    pub vacation_days: f64,
}

fn matches_job(entry: &TimeEntry, job: Option<Job>) -> bool {
    job.is_none_or(|job| entry.job == job)
}

/// Entries of one month, in collection order.
pub fn entries_in_month(
    entries: &[TimeEntry],
    period: MonthPeriod,
    job: Option<Job>,
) -> Vec<TimeEntry> {
    entries
        .iter()
        .filter(|entry| period.contains(entry.date) && matches_job(entry, job))
        .cloned()
        .collect()
}

pub fn monthly_summary(
    entries: &[TimeEntry],
    period: MonthPeriod,
    job: Option<Job>,
) -> MonthlySummary {
    entries
        .iter()
        .filter(|entry| period.contains(entry.date) && matches_job(entry, job))
        .fold(MonthlySummary::default(), |mut summary, entry| {
            match entry.kind {
                EntryKind::Vacation => summary.vacation_days += 1,
                EntryKind::Holiday => summary.holiday_days += 1,
                EntryKind::Ordinary { pause_minutes, .. } => {
                    summary.total_work_hours += entry.hours.total_hours;
                    summary.total_overtime += entry.hours.overtime_hours;
                    summary.total_pause += pause_minutes;
                }
            }
            summary
        })
}

/// Yearly balance including the carry-over from the previous year.
pub fn yearly_summary(
    entries: &[TimeEntry],
    year: i32,
    job: Option<Job>,
    carry_over: CarryOver,
) -> YearlySummary {
    let summary = entries
        .iter()
        .filter(|entry| entry.date.year() == year && matches_job(entry, job))
        .fold(YearlySummary::default(), |mut summary, entry| {
            match entry.kind {
                EntryKind::Vacation => summary.vacation_days += 1.0,
                EntryKind::Holiday => {}
                EntryKind::Ordinary { .. } => summary.total_overtime += entry.hours.overtime_hours,
            }
            summary
        });

    YearlySummary {
        total_overtime: summary.total_overtime + carry_over.overtime_hours,
        vacation_days: summary.vacation_days + carry_over.vacation_days,
    }
}
