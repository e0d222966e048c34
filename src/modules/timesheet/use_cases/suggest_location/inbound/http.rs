use axum::{Json, extract::State, extract::rejection::JsonRejection, response::IntoResponse};
use serde::Deserialize;

use crate::shell::http::{error_response, unprocessable};
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestLocationBody {
    pub time_of_day: String,
    pub calendar_events: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<SuggestLocationBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return unprocessable(rejection.body_text()),
    };
    if body.time_of_day.trim().is_empty() {
        return unprocessable("timeOfDay is required");
    }

    match state
        .suggest_location
        .handle(&body.time_of_day, body.calendar_events)
        .await
    {
        Ok(suggestion) => Json(suggestion).into_response(),
        Err(error) => error_response(error),
    }
}
