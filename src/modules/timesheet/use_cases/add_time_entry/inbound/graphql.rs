use async_graphql::{Context, Object, Result as GqlResult};
use chrono::NaiveDate;
use uuid::Uuid;

use crate::modules::timesheet::use_cases::add_time_entry::command::AddTimeEntryInput;
use crate::modules::timesheet::use_cases::summarize_timesheet::inbound::graphql::{
    GqlJob, GqlTimeEntry,
};
use crate::shell::state::AppState;

#[derive(Default)]
pub struct AddTimeEntryMutation;

#[Object]
impl AddTimeEntryMutation {
    #[allow(clippy::too_many_arguments)]
    async fn add_time_entry(
        &self,
        context: &Context<'_>,
        date: NaiveDate,
        start_time: Option<String>,
        end_time: Option<String>,
        pause: Option<u32>,
        location: Option<String>,
        job: Option<GqlJob>,
        is_vacation: Option<bool>,
        is_holiday: Option<bool>,
    ) -> GqlResult<GqlTimeEntry> {
        let state = context.data_unchecked::<AppState>();

        let input = AddTimeEntryInput {
            date,
            start_time,
            end_time,
            pause: pause.unwrap_or(0),
            location: location.unwrap_or_default(),
            job: job.map(Into::into).unwrap_or_default(),
            is_vacation: is_vacation.unwrap_or(false),
            is_holiday: is_holiday.unwrap_or(false),
        };
        let command = input
            .into_command(Uuid::now_v7().to_string())
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        let entry = state
            .add_time_entry
            .handle(command)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(entry.into())
    }
}
