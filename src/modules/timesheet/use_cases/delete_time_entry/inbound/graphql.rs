use async_graphql::{Context, ID, Object, Result as GqlResult};

use crate::modules::timesheet::use_cases::delete_time_entry::command::DeleteTimeEntry;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct DeleteTimeEntryMutation;

#[Object]
impl DeleteTimeEntryMutation {
    async fn delete_time_entry(&self, context: &Context<'_>, id: ID) -> GqlResult<ID> {
        let state = context.data_unchecked::<AppState>();
        state
            .delete_time_entry
            .handle(DeleteTimeEntry {
                time_entry_id: id.to_string(),
            })
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(id)
    }
}
