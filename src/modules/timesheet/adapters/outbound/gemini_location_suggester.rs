// LocationSuggester backed by the Gemini generateContent API.
//
// Responsibilities
// - Render the prompt from the calendar events and time of day.
// - Ask for a JSON answer through a response schema and map it to a LocationSuggestion.
//
// Notes
// - DisabledLocationSuggester stands in when no API key is configured.

use crate::modules::timesheet::use_cases::suggest_location::suggester_port::{
    LocationSuggester, LocationSuggestion, SuggestionError, SuggestionRequest,
};
use reqwest::{Client, header::CONTENT_TYPE};
use serde::Deserialize;
use serde_json::{Value, json};

pub const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";

pub struct GeminiLocationSuggester {
    client: Client,
    api_url: String,
    api_key: String,
    model: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SuggestedLocation {
    suggested_location: String,
    reason: String,
}

pub fn build_prompt(request: &SuggestionRequest) -> String {
    format!(
        "You are an AI assistant designed to suggest work locations for users filling out their timesheets.\n\
         \n\
         Based on the user's calendar events and the current time of day, suggest the most likely work location.\n\
         \n\
         Calendar Events: {}\n\
         Time of Day: {}\n\
         \n\
         Suggest a work location and provide a brief reason for the suggestion.\n\
         Follow the output schema strictly.",
        request.calendar_events, request.time_of_day
    )
}

pub fn build_request_body(request: &SuggestionRequest) -> Value {
    json!({
        "contents": [{ "role": "user", "parts": [{ "text": build_prompt(request) }] }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": {
                "type": "OBJECT",
                "properties": {
                    "suggestedLocation": {
                        "type": "STRING",
                        "description": "The suggested work location based on the calendar events and time of day."
                    },
                    "reason": {
                        "type": "STRING",
                        "description": "The reason for the suggested location."
                    }
                },
                "required": ["suggestedLocation", "reason"]
            }
        }
    })
}

/// Pulls the JSON answer out of the first candidate.
pub fn parse_response(body: &str) -> Result<LocationSuggestion, SuggestionError> {
    let response: GenerateContentResponse = serde_json::from_str(body)
        .map_err(|e| SuggestionError::InvalidResponse(e.to_string()))?;
    let text = response
        .candidates
        .into_iter()
        .filter_map(|candidate| candidate.content)
        .flat_map(|content| content.parts)
        .find_map(|part| part.text)
        .ok_or_else(|| SuggestionError::InvalidResponse("no candidate text".into()))?;

    let answer: SuggestedLocation = serde_json::from_str(text.trim())
        .map_err(|e| SuggestionError::InvalidResponse(e.to_string()))?;
    if answer.suggested_location.trim().is_empty() {
        return Err(SuggestionError::InvalidResponse("empty location".into()));
    }
    Ok(LocationSuggestion {
        location: answer.suggested_location.trim().to_string(),
        reason: answer.reason.trim().to_string(),
    })
}

impl GeminiLocationSuggester {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self::with_api_url(GEMINI_API_URL, api_key, model)
    }

    pub fn with_api_url(
        api_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            api_url: api_url.into(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.api_url.trim_end_matches('/'),
            self.model
        )
    }
}

#[async_trait::async_trait]
impl LocationSuggester for GeminiLocationSuggester {
    async fn suggest(
        &self,
        request: &SuggestionRequest,
    ) -> Result<LocationSuggestion, SuggestionError> {
        let body = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .json(&build_request_body(request))
            .send()
            .await
            .map_err(|e| SuggestionError::Request(e.to_string()))?
            .error_for_status()
            .map_err(|e| SuggestionError::Request(e.to_string()))?
            .text()
            .await
            .map_err(|e| SuggestionError::Request(e.to_string()))?;
        parse_response(&body)
    }
}

pub struct DisabledLocationSuggester;

#[async_trait::async_trait]
impl LocationSuggester for DisabledLocationSuggester {
    async fn suggest(
        &self,
        _request: &SuggestionRequest,
    ) -> Result<LocationSuggestion, SuggestionError> {
        Err(SuggestionError::NotConfigured)
    }
}
