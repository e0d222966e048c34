use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionRequest {
    /// The pending entry's start time, as typed.
    pub time_of_day: String,
    pub calendar_events: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationSuggestion {
    pub location: String,
    pub reason: String,
}

#[derive(Debug, Error)]
pub enum SuggestionError {
    #[error("location suggestions are not configured")]
    NotConfigured,

    #[error("suggestion request failed: {0}")]
    Request(String),

    #[error("unexpected suggestion response: {0}")]
    InvalidResponse(String),
}

#[async_trait]
pub trait LocationSuggester: Send + Sync {
    async fn suggest(
        &self,
        request: &SuggestionRequest,
    ) -> Result<LocationSuggestion, SuggestionError>;
}
