use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use serde::Serialize;
use tracing::error;

use crate::modules::timesheet::core::errors::DecideError;
use crate::modules::timesheet::core::ports::{HistoryError, RepositoryError};
use crate::modules::timesheet::use_cases::add_time_entry::inbound::http as add_http;
use crate::modules::timesheet::use_cases::application_error::ApplicationError;
use crate::modules::timesheet::use_cases::delete_time_entry::inbound::http as delete_http;
use crate::modules::timesheet::use_cases::download_history::inbound::http as history_http;
use crate::modules::timesheet::use_cases::export_timesheet::inbound::http as export_http;
use crate::modules::timesheet::use_cases::suggest_location::inbound::http as suggest_http;
use crate::modules::timesheet::use_cases::summarize_timesheet::inbound::http as summary_http;
use crate::modules::timesheet::use_cases::update_settings::inbound::http as settings_http;
use crate::shell::state::AppState;

pub const SUGGESTION_FAILED_MESSAGE: &str = "Failed to get suggestion from AI.";

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/entries",
            post(add_http::handle).get(summary_http::list_entries),
        )
        .route("/entries/{id}", delete(delete_http::handle))
        .route(
            "/settings",
            get(settings_http::read).patch(settings_http::update),
        )
        .route("/summary/monthly", get(summary_http::monthly))
        .route("/summary/yearly", get(summary_http::yearly))
        .route("/exports", post(export_http::handle))
        .route("/history", get(history_http::list).delete(history_http::clear))
        .route("/history/{id}", delete(history_http::delete))
        .route("/suggestions/location", post(suggest_http::handle))
        .with_state(state)
}

pub fn unprocessable(message: impl Into<String>) -> Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ErrorBody {
            error: message.into(),
        }),
    )
        .into_response()
}

pub fn status_for(error: &ApplicationError) -> StatusCode {
    match error {
        ApplicationError::Domain(DecideError::EntryNotFound(_)) => StatusCode::NOT_FOUND,
        ApplicationError::Domain(_) => StatusCode::CONFLICT,
        ApplicationError::Repository(RepositoryError::VersionMismatch { .. }) => {
            StatusCode::CONFLICT
        }
        ApplicationError::Repository(RepositoryError::Storage(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
        ApplicationError::History(HistoryError::NotFound(_)) => StatusCode::NOT_FOUND,
        ApplicationError::History(HistoryError::Storage(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        ApplicationError::Export(_) | ApplicationError::Suggestion(_) => StatusCode::BAD_GATEWAY,
    }
}

pub fn error_response(error: ApplicationError) -> Response {
    let status = status_for(&error);
    if status.is_server_error() {
        error!(%error, status = status.as_u16(), "request failed");
    }
    let message = match error {
        ApplicationError::Domain(reason) => reason.to_string(),
        ApplicationError::Suggestion(_) => SUGGESTION_FAILED_MESSAGE.to_string(),
        other => other.to_string(),
    };
    (status, Json(ErrorBody { error: message })).into_response()
}
