use crate::modules::timesheet::core::entry::{Job, TimeEntry};
use crate::modules::timesheet::core::settings::OvertimeOption;
use crate::modules::timesheet::core::summary::MonthlySummary;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Frozen copy of what went into one export or share. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadHistoryEntry {
    pub id: String,
    pub user_name: String,
    pub month_name: String,
    pub download_date: DateTime<Utc>,
    pub entries: Vec<TimeEntry>,
    pub monthly_summary: MonthlySummary,
    pub overtime_option: OvertimeOption,
    #[serde(default)]
    pub job: Option<Job>,
}
