//! Narrow seam for the generative narrative collaborator used by guest-mode
//! recommendations and city-level simulations.
//!
//! The upstream assistant returns free-form structured JSON; everything that
//! crosses this boundary is decoded into strict types with required-field
//! checks. Prompt construction and transport live behind the trait, never in
//! the ranking pipeline.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Structured request handed to the assistant collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuestRequest {
    pub language: String,
    pub job_field_code: String,
    #[serde(default)]
    pub top_k: Option<usize>,
}

/// One decoded city narrative. Every field here is required in the raw
/// response except `highlights`, which defaults to empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuestNarrative {
    pub city: String,
    pub country: String,
    pub summary: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

impl GuestNarrative {
    /// Decode a single narrative object, rejecting missing or ill-typed
    /// required fields instead of trusting the parsed structure.
    pub fn from_value(value: &Value) -> Result<Self, AssistantError> {
        let city = required_string(value, "city")?;
        let country = required_string(value, "country")?;
        let summary = required_string(value, "summary")?;
        let highlights = match value.get("highlights") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| {
                    item.as_str()
                        .map(str::to_string)
                        .ok_or(AssistantError::MalformedResponse {
                            field: "highlights",
                        })
                })
                .collect::<Result<Vec<_>, _>>()?,
            Some(_) => {
                return Err(AssistantError::MalformedResponse {
                    field: "highlights",
                })
            }
        };

        Ok(Self {
            city,
            country,
            summary,
            highlights,
        })
    }

    /// Decode a full assistant response of the shape `{"cities": [...]}`.
    pub fn decode_batch(value: &Value) -> Result<Vec<Self>, AssistantError> {
        let cities = value
            .get("cities")
            .and_then(Value::as_array)
            .ok_or(AssistantError::MalformedResponse { field: "cities" })?;

        cities.iter().map(Self::from_value).collect()
    }
}

fn required_string(value: &Value, field: &'static str) -> Result<String, AssistantError> {
    value
        .get(field)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|raw| !raw.is_empty())
        .map(str::to_string)
        .ok_or(AssistantError::MalformedResponse { field })
}

/// Collaborator trait the HTTP layer wires to the real generative backend.
pub trait NarrativeAssistant: Send + Sync {
    fn generate(&self, request: &GuestRequest) -> Result<Vec<GuestNarrative>, AssistantError>;
}

/// Assistant failures, including the explicit malformed-response path.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssistantError {
    #[error("assistant response missing or ill-typed field '{field}'")]
    MalformedResponse { field: &'static str },
    #[error("assistant unavailable: {0}")]
    Unavailable(String),
}
