//! The transcript summarization pipeline.
//!
//! One run fetches a conversation's verbose detail from the platform,
//! locates the usable transcript in its event log, submits the turns
//! to the summarizer, then normalizes the model's reply and pushes the
//! record to the dashboard.

pub mod transcript;

pub use transcript::locate_transcript;

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::ai::{SummarizerClient, build_summary_prompt};
use crate::clients::{ConversationsClient, DashboardClient};
use crate::errors::RelayError;
use crate::models::SummaryRecord;

/// Outcome of a pipeline run that got past the transcript stage.
#[derive(Debug)]
pub enum SummaryOutcome {
    /// The model's reply parsed as JSON and the normalized record was
    /// accepted by the dashboard.
    Saved(SummaryRecord),
    /// The model's reply was not valid JSON. The raw text is kept for
    /// the caller; nothing reaches the dashboard.
    Unparsed { raw_content: String, detail: String },
}

/// Run the pipeline for one conversation.
///
/// # Errors
///
/// Returns `RelayError::TranscriptNotFound` when the conversation has
/// no usable transcript, and `RelayError::Platform`, `Summarizer` or
/// `Dashboard` when the matching upstream call fails. A model reply
/// that fails to parse is not an error; see
/// [`SummaryOutcome::Unparsed`].
pub async fn summarize_conversation(
    conversations: &ConversationsClient,
    summarizer: &SummarizerClient,
    dashboard: &DashboardClient,
    conversation_id: &str,
) -> Result<SummaryOutcome, RelayError> {
    let detail = conversations.get_conversation(conversation_id).await?;

    let turns = locate_transcript(&detail.events)
        .ok_or_else(|| RelayError::TranscriptNotFound(conversation_id.to_string()))?;
    info!(
        "Located transcript with {} turns for conversation {}",
        turns.len(),
        conversation_id
    );

    let transcript_json = serde_json::to_string(&turns)
        .map_err(|e| RelayError::Platform(format!("failed to serialize transcript: {e}")))?;

    let content = summarizer
        .complete(build_summary_prompt(&transcript_json))
        .await?;
    debug!("Raw summarizer content: {}", content);

    let parsed: Value = match serde_json::from_str(&content) {
        Ok(value) => value,
        Err(e) => {
            warn!(
                "Summarizer returned unparseable JSON for conversation {}: {}",
                conversation_id, e
            );
            return Ok(SummaryOutcome::Unparsed {
                raw_content: content,
                detail: e.to_string(),
            });
        }
    };

    let record = SummaryRecord::from_model_output(&parsed);
    dashboard.push_summary(&record).await?;
    info!("Summary record saved for conversation {}", conversation_id);

    Ok(SummaryOutcome::Saved(record))
}
