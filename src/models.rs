//! Shared data types for the relay: the slice of the conversation
//! platform's payload we actually read, and the summary record we produce.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Sentinel substituted for any summary field the model could not
/// determine. The summarizer is instructed to emit it too.
pub const MISSING_FIELD: &str = "N/A";

/// One utterance in a conversation transcript, order-significant.
///
/// The platform sends more per-turn detail than this service reads, so
/// the raw JSON object is preserved and re-serialized untouched when the
/// transcript is submitted for summarization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranscriptTurn(pub Value);

/// Verbose conversation detail returned by the platform. Everything
/// except the event log is ignored here.
#[derive(Debug, Deserialize)]
pub struct ConversationDetail {
    #[serde(default)]
    pub events: Vec<ConversationEvent>,
}

/// A single entry in a conversation's event log. Only events whose
/// properties carry a transcript matter to the pipeline.
#[derive(Debug, Deserialize)]
pub struct ConversationEvent {
    pub properties: Option<EventProperties>,
}

#[derive(Debug, Deserialize)]
pub struct EventProperties {
    pub transcript: Option<Vec<TranscriptTurn>>,
}

/// Structured summary of one conversation, forwarded to the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRecord {
    pub ai_summary: String,
    pub requirements: String,
    pub requirement_summary: String,
    pub notes: String,
    pub suggestions: String,
    pub client_name: String,
    pub client_email: String,
    pub client_phone: String,
}

impl SummaryRecord {
    /// Build a record from parsed model output, reading each of the eight
    /// named fields and substituting the sentinel for anything absent or
    /// non-string.
    #[must_use]
    pub fn from_model_output(output: &Value) -> Self {
        let field = |key: &str| {
            output
                .get(key)
                .and_then(Value::as_str)
                .unwrap_or(MISSING_FIELD)
                .to_string()
        };

        Self {
            ai_summary: field("ai_summary"),
            requirements: field("requirements"),
            requirement_summary: field("requirement_summary"),
            notes: field("notes"),
            suggestions: field("suggestions"),
            client_name: field("client_name"),
            client_email: field("client_email"),
            client_phone: field("client_phone"),
        }
    }
}
