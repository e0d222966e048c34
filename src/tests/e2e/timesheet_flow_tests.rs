use crate::modules::timesheet::adapters::outbound::gemini_location_suggester::DisabledLocationSuggester;
use crate::modules::timesheet::adapters::outbound::markdown_exporter::MarkdownExporter;
use crate::modules::timesheet::use_cases::suggest_location::handler::SAMPLE_CALENDAR_EVENTS;
use crate::shared::infrastructure::key_value_store::json_file::JsonFileKeyValueStore;
use crate::shell::http::router;
use crate::shell::state::AppState;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use std::path::Path;
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

async fn app_over(path: &Path) -> Router {
    let store = JsonFileKeyValueStore::open(path).await.unwrap();
    router(AppState::new(
        Arc::new(store),
        Arc::new(MarkdownExporter),
        Arc::new(DisabledLocationSuggester),
        SAMPLE_CALENDAR_EVENTS,
    ))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn it_should_track_a_month_export_it_and_keep_everything_after_a_restart() {
    let path = std::env::temp_dir().join(format!("timesheet-e2e-{}.json", Uuid::now_v7()));
    let app = app_over(&path).await;

    let (status, _) = send(
        &app,
        json_request("POST", "/entries", r#"{"date":"2024-03-01","isVacation":true}"#),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT, "a user name comes first");

    let (status, _) = send(
        &app,
        json_request(
            "PATCH",
            "/settings",
            r#"{"userName":"Ana Horvat","carryOverOvertimeHours":4.0}"#,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    for body in [
        r#"{"date":"2024-03-01","startTime":"07:00","endTime":"16:00","pause":60,"location":"Main Office"}"#,
        r#"{"date":"2024-03-02","isVacation":true}"#,
        r#"{"date":"2024-03-04","startTime":"22:00","endTime":"07:30","pause":0,"location":"Warehouse"}"#,
    ] {
        let (status, _) = send(&app, json_request("POST", "/entries", body)).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, monthly) = send(&app, get("/summary/monthly?year=2024&month=3")).await;
    assert_eq!(monthly["totalWorkHours"], 17.5);
    assert_eq!(monthly["totalOvertime"], 1.5);
    assert_eq!(monthly["vacationDays"], 1);

    let (_, yearly) = send(&app, get("/summary/yearly?year=2024")).await;
    assert_eq!(yearly["totalOvertime"], 5.5);
    assert_eq!(yearly["vacationDays"], 1.0);

    let (status, _) = send(
        &app,
        json_request("POST", "/exports", r#"{"year":2024,"month":3}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, history) = send(&app, get("/history")).await;
    assert_eq!(history.as_array().unwrap().len(), 1);
    assert_eq!(history[0]["monthName"], "March 2024");
    assert_eq!(history[0]["entries"].as_array().unwrap().len(), 3);

    let restarted = app_over(&path).await;
    let (_, entries) = send(&restarted, get("/entries")).await;
    let dates: Vec<&str> = entries
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["date"].as_str().unwrap())
        .collect();
    assert_eq!(dates, vec!["2024-03-04", "2024-03-02", "2024-03-01"]);
    let (_, settings) = send(&restarted, get("/settings")).await;
    assert_eq!(settings["userName"], "Ana Horvat");
    let (_, history) = send(&restarted, get("/history")).await;
    assert_eq!(history.as_array().unwrap().len(), 1);

    let _ = tokio::fs::remove_file(&path).await;
}
