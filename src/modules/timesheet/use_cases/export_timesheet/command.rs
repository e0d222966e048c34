use crate::modules::timesheet::core::entry::Job;
use crate::modules::timesheet::core::period::MonthPeriod;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportAction {
    #[default]
    Download,
    Share,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExportTimesheet {
    pub period: MonthPeriod,
    pub job: Option<Job>,
    pub action: ExportAction,
    pub requested_at: DateTime<Utc>,
    /// Id of the history snapshot this export records.
    pub history_entry_id: String,
}
