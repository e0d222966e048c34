use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};
use chrono::{DateTime, Utc};

use crate::modules::timesheet::core::history::DownloadHistoryEntry;
use crate::modules::timesheet::use_cases::summarize_timesheet::inbound::graphql::{
    GqlJob, GqlTimeEntry,
};
use crate::modules::timesheet::use_cases::update_settings::inbound::graphql::GqlOvertimeOption;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlDownloadHistoryEntry {
    pub id: String,
    pub user_name: String,
    pub month_name: String,
    pub download_date: DateTime<Utc>,
    pub entries: Vec<GqlTimeEntry>,
    pub total_work_hours: f64,
    pub total_overtime: f64,
    pub total_pause: u32,
    pub vacation_days: u32,
    pub holiday_days: u32,
    pub overtime_option: GqlOvertimeOption,
    pub job: Option<GqlJob>,
}

impl From<DownloadHistoryEntry> for GqlDownloadHistoryEntry {
    fn from(h: DownloadHistoryEntry) -> Self {
        let summary = h.monthly_summary;
        Self {
            id: h.id,
            user_name: h.user_name,
            month_name: h.month_name,
            download_date: h.download_date,
            entries: h.entries.into_iter().map(Into::into).collect(),
            total_work_hours: summary.total_work_hours,
            total_overtime: summary.total_overtime,
            total_pause: summary.total_pause,
            vacation_days: summary.vacation_days,
            holiday_days: summary.holiday_days,
            overtime_option: h.overtime_option.into(),
            job: h.job.map(Into::into),
        }
    }
}

#[derive(Default)]
pub struct DownloadHistoryQuery;

#[Object]
impl DownloadHistoryQuery {
    async fn download_history(
        &self,
        context: &Context<'_>,
    ) -> GqlResult<Vec<GqlDownloadHistoryEntry>> {
        let state = context.data_unchecked::<AppState>();
        let list = state
            .download_history
            .list()
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(list.into_iter().map(Into::into).collect())
    }
}
