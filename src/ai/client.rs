//! Chat-completion client for the transcript summarizer.
//!
//! The summarization service speaks the OpenAI-compatible chat
//! completion wire format, so requests are built with the standard
//! chat types and sent over the shared HTTP client.

use openai_api_rs::v1::chat_completion::{ChatCompletionMessage, ChatCompletionRequest};
use serde_json::Value;
use tracing::info;

use crate::clients::HTTP_CLIENT;
use crate::errors::RelayError;

/// Pull the first choice's message content out of a chat-completion
/// response body.
fn extract_message_content(response_json: &Value) -> Option<String> {
    response_json
        .get("choices")
        .and_then(|choices| choices.as_array())
        .and_then(|choices| choices.first())
        .and_then(|choice| choice.get("message"))
        .and_then(|message| message.get("content"))
        .and_then(|content| content.as_str())
        .map(std::string::ToString::to_string)
}

/// Client for the chat-completion service that writes the summaries.
pub struct SummarizerClient {
    api_url: String,
    api_key: String,
    model: String,
}

impl SummarizerClient {
    #[must_use]
    pub fn new(api_url: String, api_key: String, model: String) -> Self {
        Self {
            api_url,
            api_key,
            model,
        }
    }

    /// Submit a prompt and return the first choice's message content.
    ///
    /// # Errors
    ///
    /// Returns `RelayError::Summarizer` if the request fails, the
    /// service answers with a non-success status, or the response
    /// carries no message content.
    pub async fn complete(
        &self,
        prompt: Vec<ChatCompletionMessage>,
    ) -> Result<String, RelayError> {
        info!(
            "Requesting completion with {} messages in prompt",
            prompt.len()
        );

        let request_body = ChatCompletionRequest::new(self.model.clone(), prompt);

        let response = HTTP_CLIENT
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| RelayError::Summarizer(format!("completion request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|e| {
                format!("Failed to read error response body (status {status}): {e}")
            });
            return Err(RelayError::Summarizer(format!(
                "completion returned status {status}: {error_text}"
            )));
        }

        let response_json: Value = response
            .json()
            .await
            .map_err(|e| RelayError::Summarizer(format!("failed to decode completion: {e}")))?;

        extract_message_content(&response_json).ok_or_else(|| {
            RelayError::Summarizer("completion response carried no message content".to_string())
        })
    }
}
