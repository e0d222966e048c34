// Read side of the timesheet.
//
// Responsibilities
// - Load the current snapshot and run the pure aggregators over it.
// - Never write. Summaries are recomputed on every call.

use crate::modules::timesheet::core::entry::{Job, TimeEntry};
use crate::modules::timesheet::core::period::MonthPeriod;
use crate::modules::timesheet::core::ports::TimesheetRepository;
use crate::modules::timesheet::core::settings::Settings;
use crate::modules::timesheet::core::summary::{
    MonthlySummary, YearlySummary, entries_in_month, monthly_summary, yearly_summary,
};
use crate::modules::timesheet::use_cases::application_error::ApplicationError;
use std::sync::Arc;

pub struct TimesheetQueries<TRepository>
where
    TRepository: TimesheetRepository + 'static,
{
    repository: Arc<TRepository>,
}

impl<TRepository> TimesheetQueries<TRepository>
where
    TRepository: TimesheetRepository + 'static,
{
    pub fn new(repository: Arc<TRepository>) -> Self {
        Self { repository }
    }

    /// Newest date first. Without a period every entry is returned.
    pub async fn list_entries(
        &self,
        period: Option<MonthPeriod>,
        job: Option<Job>,
    ) -> Result<Vec<TimeEntry>, ApplicationError> {
        let state = self.repository.load().await?.state;
        Ok(match period {
            Some(period) => entries_in_month(&state.entries, period, job),
            None => state
                .entries
                .into_iter()
                .filter(|entry| job.is_none_or(|job| entry.job == job))
                .collect(),
        })
    }

    pub async fn monthly_summary(
        &self,
        period: MonthPeriod,
        job: Option<Job>,
    ) -> Result<MonthlySummary, ApplicationError> {
        let state = self.repository.load().await?.state;
        Ok(monthly_summary(&state.entries, period, job))
    }

    pub async fn yearly_summary(
        &self,
        year: i32,
        job: Option<Job>,
    ) -> Result<YearlySummary, ApplicationError> {
        let state = self.repository.load().await?.state;
        Ok(yearly_summary(
            &state.entries,
            year,
            job,
            state.settings.carry_over,
        ))
    }

    pub async fn settings(&self) -> Result<Settings, ApplicationError> {
        Ok(self.repository.load().await?.state.settings)
    }
}
