use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::timesheet::use_cases::delete_time_entry::command::DeleteTimeEntry;
use crate::shell::http::error_response;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(time_entry_id): Path<String>,
) -> impl IntoResponse {
    match state
        .delete_time_entry
        .handle(DeleteTimeEntry { time_entry_id })
        .await
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error),
    }
}
