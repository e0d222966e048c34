use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};

use crate::modules::timesheet::core::entry::Job;
use crate::modules::timesheet::core::period::MonthPeriod;
use crate::modules::timesheet::core::summary::{MonthlySummary, YearlySummary};
use crate::shell::http::{error_response, unprocessable};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct MonthParams {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub job: Option<Job>,
}

#[derive(Deserialize)]
pub struct YearlySummaryParams {
    pub year: Option<i32>,
    pub job: Option<Job>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySummaryResponse {
    pub year: i32,
    pub month: u32,
    pub month_name: String,
    pub job: Option<Job>,
    #[serde(flatten)]
    pub summary: MonthlySummary,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlySummaryResponse {
    pub year: i32,
    pub job: Option<Job>,
    #[serde(flatten)]
    pub summary: YearlySummary,
}

/// Resolves the requested month, defaulting to the current local month.
pub fn resolve_period(year: Option<i32>, month: Option<u32>) -> Result<MonthPeriod, Response> {
    MonthPeriod::resolve(Local::now().date_naive(), year, month)
        .map_err(|invalid| unprocessable(invalid.to_string()))
}

pub async fn list_entries(
    State(state): State<AppState>,
    Query(params): Query<MonthParams>,
) -> impl IntoResponse {
    let period = match (params.year, params.month) {
        (None, None) => None,
        (_, None) => return unprocessable("month is required when year is given"),
        (year, month) => match resolve_period(year, month) {
            Ok(period) => Some(period),
            Err(response) => return response,
        },
    };

    match state.queries.list_entries(period, params.job).await {
        Ok(entries) => Json(entries).into_response(),
        Err(error) => error_response(error),
    }
}

pub async fn monthly(
    State(state): State<AppState>,
    Query(params): Query<MonthParams>,
) -> impl IntoResponse {
    let period = match resolve_period(params.year, params.month) {
        Ok(period) => period,
        Err(response) => return response,
    };

    match state.queries.monthly_summary(period, params.job).await {
        Ok(summary) => Json(MonthlySummaryResponse {
            year: period.year(),
            month: period.month(),
            month_name: period.label(),
            job: params.job,
            summary,
        })
        .into_response(),
        Err(error) => error_response(error),
    }
}

pub async fn yearly(
    State(state): State<AppState>,
    Query(params): Query<YearlySummaryParams>,
) -> impl IntoResponse {
    let year = params.year.unwrap_or_else(|| Local::now().year());

    match state.queries.yearly_summary(year, params.job).await {
        Ok(summary) => Json(YearlySummaryResponse {
            year,
            job: params.job,
            summary,
        })
        .into_response(),
        Err(error) => error_response(error),
    }
}

#[cfg(test)]
mod summarize_timesheet_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::shell::state::AppState;
    use crate::tests::fixtures::state::{make_offline_state, make_state_with_march};

    use super::{list_entries, monthly, yearly};

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/entries", get(list_entries))
            .route("/summary/monthly", get(monthly))
            .route("/summary/yearly", get(yearly))
            .with_state(state)
    }

    async fn get_json(state: AppState, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app(state)
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn it_should_return_the_entries_of_one_month_for_one_job() {
        let (status, json) = get_json(
            make_state_with_march().await,
            "/entries?year=2024&month=3&job=job1",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let dates: Vec<&str> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|entry| entry["date"].as_str().unwrap())
            .collect();
        assert_eq!(dates, vec!["2024-03-05", "2024-03-02", "2024-03-01"]);
    }

    #[tokio::test]
    async fn it_should_return_the_monthly_summary() {
        let (status, json) =
            get_json(make_state_with_march().await, "/summary/monthly?year=2024&month=3").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json,
            serde_json::json!({
                "year": 2024,
                "month": 3,
                "monthName": "March 2024",
                "job": null,
                "totalWorkHours": 17.5,
                "totalOvertime": 1.5,
                "totalPause": 60,
                "vacationDays": 1,
                "holidayDays": 1
            })
        );
    }

    #[tokio::test]
    async fn it_should_return_the_yearly_summary_for_one_job() {
        let (status, json) =
            get_json(make_state_with_march().await, "/summary/yearly?year=2024&job=job2").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["totalOvertime"], 1.5);
        assert_eq!(json["vacationDays"], 0.0);
    }

    #[tokio::test]
    async fn it_should_return_422_for_an_invalid_month() {
        let (status, _) =
            get_json(make_state_with_march().await, "/summary/monthly?year=2024&month=13").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn it_should_return_400_for_an_unknown_job() {
        let (status, _) = get_json(make_state_with_march().await, "/entries?job=job3").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn it_should_return_500_when_the_store_is_offline() {
        let (status, json) = get_json(make_offline_state(), "/summary/yearly?year=2024").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(json["error"].is_string());
    }
}
