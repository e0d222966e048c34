use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use uuid::Uuid;

use crate::modules::timesheet::use_cases::add_time_entry::command::AddTimeEntryInput;
use crate::shell::http::{error_response, unprocessable};
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<AddTimeEntryInput>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return unprocessable(rejection.body_text()),
    };

    let command = match body.into_command(Uuid::now_v7().to_string()) {
        Ok(command) => command,
        Err(invalid) => return unprocessable(invalid.to_string()),
    };

    match state.add_time_entry.handle(command).await {
        Ok(entry) => (StatusCode::CREATED, Json(entry)).into_response(),
        Err(error) => error_response(error),
    }
}
