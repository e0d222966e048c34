use async_graphql::{EmptySubscription, MergedObject, Schema};

use crate::modules::timesheet::use_cases::add_time_entry::inbound::graphql::AddTimeEntryMutation;
use crate::modules::timesheet::use_cases::delete_time_entry::inbound::graphql::DeleteTimeEntryMutation;
use crate::modules::timesheet::use_cases::download_history::inbound::graphql::DownloadHistoryQuery;
use crate::modules::timesheet::use_cases::summarize_timesheet::inbound::graphql::TimesheetQuery;
use crate::modules::timesheet::use_cases::update_settings::inbound::graphql::UpdateSettingsMutation;
pub use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(TimesheetQuery, DownloadHistoryQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(
    AddTimeEntryMutation,
    DeleteTimeEntryMutation,
    UpdateSettingsMutation,
);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .data(state)
    .finish()
}
