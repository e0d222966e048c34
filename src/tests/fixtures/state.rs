// Shared state fixtures: timesheet snapshots, seeded repositories and wired AppStates.

use crate::modules::timesheet::adapters::outbound::gemini_location_suggester::DisabledLocationSuggester;
use crate::modules::timesheet::adapters::outbound::key_value_history_repository::KeyValueHistoryRepository;
use crate::modules::timesheet::adapters::outbound::key_value_timesheet_repository::{
    KeyValueTimesheetRepository, USER_NAME_KEY,
};
use crate::modules::timesheet::adapters::outbound::markdown_exporter::MarkdownExporter;
use crate::modules::timesheet::core::entry::{Job, TimeEntry};
use crate::modules::timesheet::core::ports::{HistoryRepository, TimesheetRepository};
use crate::modules::timesheet::core::settings::{Language, Settings};
use crate::modules::timesheet::core::state::TimesheetState;
use crate::modules::timesheet::use_cases::suggest_location::handler::SAMPLE_CALENDAR_EVENTS;
use crate::shared::infrastructure::key_value_store::KeyValueStore;
use crate::shared::infrastructure::key_value_store::in_memory::InMemoryKeyValueStore;
use crate::shell::state::AppState;
use crate::tests::fixtures::history::history_entry;
use chrono::NaiveDate;
use std::sync::Arc;

pub fn state_for_user(user_name: &str) -> TimesheetState {
    TimesheetState {
        entries: Vec::new(),
        settings: Settings {
            user_name: user_name.to_string(),
            ..Settings::default()
        },
    }
}

fn shift(id: &str, day: u32, start: &str, end: &str, pause: u32, job: Job) -> TimeEntry {
    TimeEntry::ordinary(
        id,
        NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
        job,
        start.parse().unwrap(),
        end.parse().unwrap(),
        pause,
        "Main Office",
    )
}

/// Four March 2024 entries: 8.0h on the 1st, vacation on the 2nd,
/// 9.5h for job2 on the 4th and a holiday on the 5th.
pub fn state_with_march() -> TimesheetState {
    let mut state = state_for_user("Ana Horvat");
    state.entries = vec![
        shift("te-shift", 1, "07:00", "16:00", 60, Job::Job1),
        TimeEntry::vacation(
            "te-vacation",
            NaiveDate::from_ymd_opt(2024, 3, 2).unwrap(),
            Job::Job1,
            Language::En,
        ),
        shift("te-job2", 4, "08:00", "17:30", 0, Job::Job2),
        TimeEntry::holiday(
            "te-holiday",
            NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            Job::Job1,
            Language::En,
        ),
    ];
    state.sort_entries();
    state
}

async fn save_into(store: Arc<InMemoryKeyValueStore>, state: &TimesheetState) {
    KeyValueTimesheetRepository::new(store)
        .save(0, state)
        .await
        .unwrap();
}

pub async fn seeded_repository(user_name: &str) -> Arc<KeyValueTimesheetRepository> {
    let repository = Arc::new(KeyValueTimesheetRepository::new(Arc::new(
        InMemoryKeyValueStore::new(),
    )));
    repository.save(0, &state_for_user(user_name)).await.unwrap();
    repository
}

pub async fn repository_with_march() -> Arc<KeyValueTimesheetRepository> {
    let repository = Arc::new(KeyValueTimesheetRepository::new(Arc::new(
        InMemoryKeyValueStore::new(),
    )));
    repository.save(0, &state_with_march()).await.unwrap();
    repository
}

fn wire(store: Arc<InMemoryKeyValueStore>) -> AppState {
    AppState::new(
        store,
        Arc::new(MarkdownExporter),
        Arc::new(DisabledLocationSuggester),
        SAMPLE_CALENDAR_EVENTS,
    )
}

pub async fn make_test_state(user_name: &str) -> AppState {
    let store = Arc::new(InMemoryKeyValueStore::new());
    store.set(USER_NAME_KEY, user_name.to_string()).await.unwrap();
    wire(store)
}

pub async fn make_state_with_march() -> AppState {
    let store = Arc::new(InMemoryKeyValueStore::new());
    save_into(store.clone(), &state_with_march()).await;
    wire(store)
}

pub async fn make_state_with_history() -> AppState {
    let store = Arc::new(InMemoryKeyValueStore::new());
    let history = KeyValueHistoryRepository::new(store.clone());
    history.append(history_entry("h-1", 1)).await.unwrap();
    history.append(history_entry("h-2", 2)).await.unwrap();
    wire(store)
}

pub fn make_offline_state() -> AppState {
    let mut store = InMemoryKeyValueStore::new();
    store.toggle_offline();
    wire(Arc::new(store))
}
