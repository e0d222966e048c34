use axum::{
    Json,
    extract::State,
    extract::rejection::JsonRejection,
    http::{StatusCode, header},
    response::IntoResponse,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::timesheet::core::entry::Job;
use crate::modules::timesheet::use_cases::export_timesheet::command::{
    ExportAction, ExportTimesheet,
};
use crate::modules::timesheet::use_cases::export_timesheet::handler::ExportOutcome;
use crate::modules::timesheet::use_cases::summarize_timesheet::inbound::http::resolve_period;
use crate::shell::http::{error_response, unprocessable};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ExportTimesheetBody {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub job: Option<Job>,
    #[serde(default)]
    pub action: ExportAction,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub file_name: String,
    pub content_type: String,
    pub content: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<ExportTimesheetBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return unprocessable(rejection.body_text()),
    };
    let period = match resolve_period(body.year, body.month) {
        Ok(period) => period,
        Err(response) => return response,
    };

    let command = ExportTimesheet {
        period,
        job: body.job,
        action: body.action,
        requested_at: Utc::now(),
        history_entry_id: Uuid::now_v7().to_string(),
    };

    match state.export_timesheet.handle(command).await {
        Ok(ExportOutcome::Download(artifact)) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, artifact.content_type),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", artifact.file_name),
                ),
            ],
            artifact.content,
        )
            .into_response(),
        Ok(ExportOutcome::Share {
            title,
            text,
            artifact,
        }) => Json(SharePayload {
            title,
            text,
            file_name: artifact.file_name,
            content_type: artifact.content_type,
            content: String::from_utf8_lossy(&artifact.content).into_owned(),
        })
        .into_response(),
        Err(error) => error_response(error),
    }
}
