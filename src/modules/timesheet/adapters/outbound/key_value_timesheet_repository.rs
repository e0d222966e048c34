// TimesheetRepository over the key/value store, using the saved-state layout of the original app.
//
// Responsibilities
// - Decode each key on load. A value that cannot be decoded is treated as absent and logged.
// - Write every key of the snapshot in one batch on save.
// - Enforce optimistic concurrency with a process-local version counter.

use crate::modules::timesheet::core::entry::{TimeEntry, TimeEntryRecord};
use crate::modules::timesheet::core::ports::{LoadedTimesheet, RepositoryError, TimesheetRepository};
use crate::modules::timesheet::core::settings::{CarryOver, Language, OvertimeOption, Settings};
use crate::modules::timesheet::core::state::TimesheetState;
use crate::shared::infrastructure::key_value_store::{KeyValueStore, StorageError};
use std::str::FromStr;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::warn;

pub const ENTRIES_KEY: &str = "timesheet-entries";
pub const OVERTIME_OPTION_KEY: &str = "overtime-option";
pub const USER_NAME_KEY: &str = "user-name";
pub const CARRY_OVER_VACATION_KEY: &str = "carry-over-vacation";
pub const CARRY_OVER_OVERTIME_KEY: &str = "carry-over-overtime";
pub const LANGUAGE_KEY: &str = "language";

pub struct KeyValueTimesheetRepository {
    store: Arc<dyn KeyValueStore>,
    version: Mutex<i64>,
}

impl KeyValueTimesheetRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            version: Mutex::new(0),
        }
    }

    async fn load_entries(&self) -> Result<Vec<TimeEntry>, StorageError> {
        let Some(raw) = self.store.get(ENTRIES_KEY).await? else {
            return Ok(Vec::new());
        };
        let values = match serde_json::from_str::<Vec<serde_json::Value>>(&raw) {
            Ok(values) => values,
            Err(error) => {
                warn!(key = ENTRIES_KEY, %error, "saved entries are unreadable, ignoring them");
                return Ok(Vec::new());
            }
        };

        let entries = values
            .into_iter()
            .filter_map(|value| {
                serde_json::from_value::<TimeEntryRecord>(value)
                    .map_err(|error| error.to_string())
                    .and_then(|record| {
                        TimeEntry::try_from(record).map_err(|error| error.to_string())
                    })
                    .inspect_err(|error| warn!(key = ENTRIES_KEY, %error, "skipping saved entry"))
                    .ok()
            })
            .collect();
        Ok(entries)
    }

    async fn load_parsed<T: FromStr>(&self, key: &str) -> Result<Option<T>, StorageError> {
        let Some(raw) = self.store.get(key).await? else {
            return Ok(None);
        };
        match raw.trim().parse::<T>() {
            Ok(value) => Ok(Some(value)),
            Err(_) => {
                warn!(key, value = %raw, "saved value is unreadable, using the default");
                Ok(None)
            }
        }
    }

    async fn load_settings(&self) -> Result<Settings, StorageError> {
        Ok(Settings {
            user_name: self.store.get(USER_NAME_KEY).await?.unwrap_or_default(),
            overtime_option: self
                .load_parsed::<OvertimeOption>(OVERTIME_OPTION_KEY)
                .await?
                .unwrap_or_default(),
            carry_over: CarryOver {
                vacation_days: self
                    .load_parsed::<f64>(CARRY_OVER_VACATION_KEY)
                    .await?
                    .filter(|days| days.is_finite())
                    .unwrap_or_default(),
                overtime_hours: self
                    .load_parsed::<f64>(CARRY_OVER_OVERTIME_KEY)
                    .await?
                    .filter(|hours| hours.is_finite())
                    .unwrap_or_default(),
            },
            language: self
                .load_parsed::<Language>(LANGUAGE_KEY)
                .await?
                .unwrap_or_default(),
        })
    }

    fn encode(state: &TimesheetState) -> Result<Vec<(String, String)>, StorageError> {
        let records: Vec<TimeEntryRecord> = state.entries.iter().cloned().map(Into::into).collect();
        let entries = serde_json::to_string(&records)
            .map_err(|error| StorageError::Serialization(error.to_string()))?;
        let settings = &state.settings;

        Ok(vec![
            (ENTRIES_KEY.to_string(), entries),
            (
                OVERTIME_OPTION_KEY.to_string(),
                settings.overtime_option.as_str().to_string(),
            ),
            (USER_NAME_KEY.to_string(), settings.user_name.clone()),
            (
                CARRY_OVER_VACATION_KEY.to_string(),
                settings.carry_over.vacation_days.to_string(),
            ),
            (
                CARRY_OVER_OVERTIME_KEY.to_string(),
                settings.carry_over.overtime_hours.to_string(),
            ),
            (LANGUAGE_KEY.to_string(), settings.language.as_str().to_string()),
        ])
    }
}

#[async_trait::async_trait]
impl TimesheetRepository for KeyValueTimesheetRepository {
    async fn load(&self) -> Result<LoadedTimesheet, RepositoryError> {
        let version = *self.version.lock().await;
        let mut state = TimesheetState {
            entries: self.load_entries().await?,
            settings: self.load_settings().await?,
        };
        state.sort_entries();
        Ok(LoadedTimesheet { state, version })
    }

    async fn save(
        &self,
        expected_version: i64,
        state: &TimesheetState,
    ) -> Result<(), RepositoryError> {
        let mut version = self.version.lock().await;
        if *version != expected_version {
            return Err(RepositoryError::VersionMismatch {
                expected: expected_version,
                actual: *version,
            });
        }
        self.store.set_many(Self::encode(state)?).await?;
        *version += 1;
        Ok(())
    }
}
