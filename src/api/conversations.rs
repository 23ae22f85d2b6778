//! Handlers for the conversation endpoints, including the transcript
//! summarization pipeline.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::Local;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::{error, info};

use super::helpers::error_response;
use super::state::AppState;
use crate::config::AppConfig;
use crate::errors::RelayError;
use crate::models::SummaryRecord;
use crate::summary::{self, SummaryOutcome};

const DEFAULT_CONVERSATION_NAME: &str = "A Meeting with a Potential Client";
const DEFAULT_GREETING: &str = "Hey there!";
const DEFAULT_CALLBACK_URL: &str = "https://your-real-domain.com/webhook";

/// Optional overrides the frontend may send when starting a
/// conversation.
#[derive(Debug, Deserialize)]
pub struct StartConversationRequest {
    pub conversation_name: Option<String>,
    pub context: Option<String>,
    pub greeting: Option<String>,
}

#[derive(Debug, Serialize)]
struct SummarySavedResponse {
    message: String,
    data: SummaryRecord,
}

#[derive(Debug, Serialize)]
struct UnparsedSummaryResponse {
    raw_content: String,
    error: String,
}

#[derive(Debug, Serialize)]
struct MessageResponse {
    message: String,
}

/// `POST /start-conversation`.
///
/// Builds the full platform payload around the frontend's optional
/// overrides and relays the platform's answer verbatim.
pub async fn start_conversation(
    State(state): State<Arc<AppState>>,
    Json(request): Json<StartConversationRequest>,
) -> Response {
    let now = Local::now().to_rfc3339();
    let payload = build_conversation_payload(&state.config, &request, &now);

    match state.conversations.create_conversation(&payload).await {
        Ok(created) => Json(created).into_response(),
        Err(e) => {
            error!("Failed to start conversation: {}", e);
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to start conversation",
            )
        }
    }
}

/// `POST /end/{conversation_id}`.
pub async fn end_conversation(
    State(state): State<Arc<AppState>>,
    Path(conversation_id): Path<String>,
) -> Response {
    match state.conversations.end_conversation(&conversation_id).await {
        Ok(()) => Json(MessageResponse {
            message: "Conversation ended successfully".to_string(),
        })
        .into_response(),
        Err(e) => {
            error!("Failed to end conversation {}: {}", conversation_id, e);
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to end conversation",
            )
        }
    }
}

/// `GET /conversation/{conversation_id}`.
///
/// Runs the summarization pipeline and maps its outcome onto the
/// response contract: 200 with the saved record, 200 with the raw model
/// text when it was unparseable, 404 when the conversation has no
/// usable transcript, 500 when an upstream call fails.
pub async fn conversation_summary(
    State(state): State<Arc<AppState>>,
    Path(conversation_id): Path<String>,
) -> Response {
    info!("Summarizing conversation {}", conversation_id);

    let outcome = summary::summarize_conversation(
        &state.conversations,
        &state.summarizer,
        &state.dashboard,
        &conversation_id,
    )
    .await;

    match outcome {
        Ok(SummaryOutcome::Saved(record)) => Json(SummarySavedResponse {
            message: "Conversation details saved successfully".to_string(),
            data: record,
        })
        .into_response(),
        Ok(SummaryOutcome::Unparsed { raw_content, .. }) => Json(UnparsedSummaryResponse {
            raw_content,
            error: "Could not parse as JSON".to_string(),
        })
        .into_response(),
        Err(RelayError::TranscriptNotFound(_)) => {
            info!("No usable transcript in conversation {}", conversation_id);
            error_response(
                StatusCode::NOT_FOUND,
                "No transcript found in conversation",
            )
        }
        Err(e) => {
            error!("Failed to summarize conversation {}: {}", conversation_id, e);
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch conversation details",
            )
        }
    }
}

/// Shape the outbound conversation-create payload. Absent overrides
/// fall back to the deployment defaults; the properties block is fixed.
fn build_conversation_payload(
    config: &AppConfig,
    request: &StartConversationRequest,
    now: &str,
) -> Value {
    let context = request
        .context
        .clone()
        .unwrap_or_else(|| default_context(now));

    json!({
        "replica_id": config.replica_id,
        "persona_id": config.persona_id,
        "callback_url": config.callback_url.as_deref().unwrap_or(DEFAULT_CALLBACK_URL),
        "conversation_name": request
            .conversation_name
            .as_deref()
            .unwrap_or(DEFAULT_CONVERSATION_NAME),
        "conversational_context": context,
        "custom_greeting": request.greeting.as_deref().unwrap_or(DEFAULT_GREETING),
        "properties": {
            "max_call_duration": 3600,
            "participant_left_timeout": 10,
            "participant_absent_timeout": 300,
            "enable_recording": true,
            "enable_closed_captions": true,
            "apply_greenscreen": false,
            "language": "english",
            "recording_s3_bucket_name": "conversation-recordings",
            "recording_s3_bucket_region": "us-east-1",
            "aws_assume_role_arn": "",
        },
    })
}

fn default_context(now: &str) -> String {
    format!(
        "You are the company's AI video engagement agent, replacing traditional web forms. \
         Your job is to warmly greet potential clients, ask what services they are looking \
         for, and help assess whether their needs align with the company's offerings. If \
         their request is not a fit, kindly suggest reaching out via email. Be helpful, \
         trustworthy, and human-like. Current date and time is {now}."
    )
}
