use async_graphql::{Context, Enum, Object, Result as GqlResult, SimpleObject};
use chrono::{Datelike, Local, NaiveDate};

use crate::modules::timesheet::core::entry::{Job, TimeEntry};
use crate::modules::timesheet::core::period::MonthPeriod;
use crate::modules::timesheet::core::summary::{MonthlySummary, YearlySummary};
use crate::modules::timesheet::use_cases::update_settings::inbound::graphql::GqlSettings;
use crate::shell::state::AppState;

#[derive(Enum, Copy, Clone, Eq, PartialEq)]
pub enum GqlJob {
    Job1,
    Job2,
}

impl From<Job> for GqlJob {
    fn from(job: Job) -> Self {
        match job {
            Job::Job1 => Self::Job1,
            Job::Job2 => Self::Job2,
        }
    }
}

impl From<GqlJob> for Job {
    fn from(job: GqlJob) -> Self {
        match job {
            GqlJob::Job1 => Self::Job1,
            GqlJob::Job2 => Self::Job2,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlTimeEntry {
    pub id: String,
    pub date: NaiveDate,
    pub job: GqlJob,
    pub location: String,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub pause: u32,
    pub total_hours: f64,
    pub overtime_hours: f64,
    pub is_vacation: bool,
    pub is_holiday: bool,
}

impl From<TimeEntry> for GqlTimeEntry {
    fn from(e: TimeEntry) -> Self {
        Self {
            start_time: e.start_time().map(|t| t.to_string()),
            end_time: e.end_time().map(|t| t.to_string()),
            pause: e.pause_minutes(),
            is_vacation: e.is_vacation(),
            is_holiday: e.is_holiday(),
            total_hours: e.hours.total_hours,
            overtime_hours: e.hours.overtime_hours,
            job: e.job.into(),
            id: e.id,
            date: e.date,
            location: e.location,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlMonthlySummary {
    pub year: i32,
    pub month: u32,
    pub month_name: String,
    pub total_work_hours: f64,
    pub total_overtime: f64,
    pub total_pause: u32,
    pub vacation_days: u32,
    pub holiday_days: u32,
}

impl GqlMonthlySummary {
    fn new(period: MonthPeriod, s: MonthlySummary) -> Self {
        Self {
            year: period.year(),
            month: period.month(),
            month_name: period.label(),
            total_work_hours: s.total_work_hours,
            total_overtime: s.total_overtime,
            total_pause: s.total_pause,
            vacation_days: s.vacation_days,
            holiday_days: s.holiday_days,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlYearlySummary {
    pub year: i32,
    pub total_overtime: f64,
    pub vacation_days: f64,
}

impl GqlYearlySummary {
    fn new(year: i32, s: YearlySummary) -> Self {
        Self {
            year,
            total_overtime: s.total_overtime,
            vacation_days: s.vacation_days,
        }
    }
}

fn period_or_current(year: Option<i32>, month: Option<u32>) -> GqlResult<MonthPeriod> {
    MonthPeriod::resolve(Local::now().date_naive(), year, month)
        .map_err(|e| async_graphql::Error::new(e.to_string()))
}

#[derive(Default)]
pub struct TimesheetQuery;

#[Object]
impl TimesheetQuery {
    /// Every entry, or one month when `month` is given.
    async fn entries(
        &self,
        context: &Context<'_>,
        year: Option<i32>,
        month: Option<u32>,
        job: Option<GqlJob>,
    ) -> GqlResult<Vec<GqlTimeEntry>> {
        let state = context.data_unchecked::<AppState>();
        let period = match month {
            Some(month) => Some(period_or_current(year, Some(month))?),
            None => None,
        };
        let list = state
            .queries
            .list_entries(period, job.map(Into::into))
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(list.into_iter().map(Into::into).collect())
    }

    async fn monthly_summary(
        &self,
        context: &Context<'_>,
        year: Option<i32>,
        month: Option<u32>,
        job: Option<GqlJob>,
    ) -> GqlResult<GqlMonthlySummary> {
        let state = context.data_unchecked::<AppState>();
        let period = period_or_current(year, month)?;
        let summary = state
            .queries
            .monthly_summary(period, job.map(Into::into))
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(GqlMonthlySummary::new(period, summary))
    }

    async fn yearly_summary(
        &self,
        context: &Context<'_>,
        year: Option<i32>,
        job: Option<GqlJob>,
    ) -> GqlResult<GqlYearlySummary> {
        let state = context.data_unchecked::<AppState>();
        let year = year.unwrap_or_else(|| Local::now().year());
        let summary = state
            .queries
            .yearly_summary(year, job.map(Into::into))
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(GqlYearlySummary::new(year, summary))
    }

    async fn settings(&self, context: &Context<'_>) -> GqlResult<GqlSettings> {
        let state = context.data_unchecked::<AppState>();
        let settings = state
            .queries
            .settings()
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(settings.into())
    }
}
