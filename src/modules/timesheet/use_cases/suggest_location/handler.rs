use crate::modules::timesheet::use_cases::application_error::ApplicationError;
use crate::modules::timesheet::use_cases::suggest_location::suggester_port::{
    LocationSuggester, LocationSuggestion, SuggestionRequest,
};
use std::sync::Arc;
use tracing::{error, info};

/// Used until a real calendar is connected.
pub const SAMPLE_CALENDAR_EVENTS: &str = "\
- 10:00 AM - 11:00 AM: Project A-Team Sync @ Main Office
- 02:00 PM - 03:00 PM: Client Meeting @ Client Site X";

pub struct SuggestLocationHandler {
    suggester: Arc<dyn LocationSuggester>,
    default_calendar_events: String,
}

impl SuggestLocationHandler {
    pub fn new(
        suggester: Arc<dyn LocationSuggester>,
        default_calendar_events: impl Into<String>,
    ) -> Self {
        Self {
            suggester,
            default_calendar_events: default_calendar_events.into(),
        }
    }

    pub async fn handle(
        &self,
        time_of_day: &str,
        calendar_events: Option<String>,
    ) -> Result<LocationSuggestion, ApplicationError> {
        let request = SuggestionRequest {
            time_of_day: time_of_day.trim().to_string(),
            calendar_events: calendar_events
                .filter(|events| !events.trim().is_empty())
                .unwrap_or_else(|| self.default_calendar_events.clone()),
        };

        match self.suggester.suggest(&request).await {
            Ok(suggestion) => {
                info!(
                    time_of_day = %request.time_of_day,
                    location = %suggestion.location,
                    "location suggested"
                );
                Ok(suggestion)
            }
            Err(e) => {
                error!(error = %e, "location suggestion failed");
                Err(e.into())
            }
        }
    }
}
