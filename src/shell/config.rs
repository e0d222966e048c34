use anyhow::{Context, bail};
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::modules::timesheet::adapters::outbound::gemini_location_suggester::DEFAULT_GEMINI_MODEL;
use crate::modules::timesheet::use_cases::suggest_location::handler::SAMPLE_CALENDAR_EVENTS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageMode {
    File,
    Memory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub addr: SocketAddr,
    pub storage: StorageMode,
    pub data_file: PathBuf,
    /// `None` disables location suggestions.
    pub gemini: Option<GeminiConfig>,
    pub calendar_events: String,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let addr = var("TIMESHEET_ADDR")
            .unwrap_or_else(|| "127.0.0.1:8080".into())
            .parse::<SocketAddr>()
            .context("TIMESHEET_ADDR must be a socket address such as 127.0.0.1:8080")?;
        let storage = match var("TIMESHEET_STORAGE").as_deref() {
            None | Some("file") => StorageMode::File,
            Some("memory") => StorageMode::Memory,
            Some(other) => bail!("TIMESHEET_STORAGE must be 'file' or 'memory', got '{other}'"),
        };
        let gemini = var("GEMINI_API_KEY").map(|api_key| GeminiConfig {
            api_key,
            model: var("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.into()),
        });

        Ok(Self {
            addr,
            storage,
            data_file: var("TIMESHEET_DATA_FILE")
                .unwrap_or_else(|| "timesheet-data.json".into())
                .into(),
            gemini,
            calendar_events: var("TIMESHEET_CALENDAR_EVENTS")
                .unwrap_or_else(|| SAMPLE_CALENDAR_EVENTS.into()),
        })
    }
}
