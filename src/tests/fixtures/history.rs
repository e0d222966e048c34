use crate::modules::timesheet::core::history::DownloadHistoryEntry;
use crate::modules::timesheet::core::settings::OvertimeOption;
use crate::modules::timesheet::core::summary::MonthlySummary;
use chrono::{TimeZone, Utc};

/// A March 2024 snapshot downloaded on the given day of April.
pub fn history_entry(id: &str, day: u32) -> DownloadHistoryEntry {
    DownloadHistoryEntry {
        id: id.to_string(),
        user_name: "Ana Horvat".into(),
        month_name: "March 2024".into(),
        download_date: Utc.with_ymd_and_hms(2024, 4, day, 10, 0, 0).unwrap(),
        entries: Vec::new(),
        monthly_summary: MonthlySummary::default(),
        overtime_option: OvertimeOption::Keep,
        job: None,
    }
}
