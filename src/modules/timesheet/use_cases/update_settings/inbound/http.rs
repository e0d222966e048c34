use axum::{Json, extract::State, extract::rejection::JsonRejection, response::IntoResponse};

use crate::modules::timesheet::use_cases::update_settings::command::UpdateSettings;
use crate::shell::http::{error_response, unprocessable};
use crate::shell::state::AppState;

pub async fn read(State(state): State<AppState>) -> impl IntoResponse {
    match state.queries.settings().await {
        Ok(settings) => Json(settings).into_response(),
        Err(error) => error_response(error),
    }
}

pub async fn update(
    State(state): State<AppState>,
    body: Result<Json<UpdateSettings>, JsonRejection>,
) -> impl IntoResponse {
    let Json(command) = match body {
        Ok(b) => b,
        Err(rejection) => return unprocessable(rejection.body_text()),
    };

    match state.update_settings.handle(command).await {
        Ok(settings) => Json(settings).into_response(),
        Err(error) => error_response(error),
    }
}
