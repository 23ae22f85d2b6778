//! Client for the video-conversation platform.
//!
//! Covers the three platform calls the relay makes: creating a
//! conversation, ending one, and fetching the verbose detail the
//! summarization pipeline reads the transcript from.

use serde_json::Value;

use super::{HTTP_CLIENT, read_body};
use crate::errors::RelayError;
use crate::models::ConversationDetail;

pub struct ConversationsClient {
    api_url: String,
    api_key: String,
}

impl ConversationsClient {
    #[must_use]
    pub fn new(api_url: String, api_key: String) -> Self {
        Self { api_url, api_key }
    }

    /// Create a conversation from a fully built payload and return the
    /// platform's response body untouched.
    ///
    /// # Errors
    ///
    /// Returns `RelayError::Platform` on transport failure, a
    /// non-success status, or an undecodable response body.
    pub async fn create_conversation(&self, payload: &Value) -> Result<Value, RelayError> {
        let response = HTTP_CLIENT
            .post(&self.api_url)
            .header("x-api-key", &self.api_key)
            .json(payload)
            .send()
            .await
            .map_err(|e| RelayError::Platform(format!("create request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = read_body(response).await;
            return Err(RelayError::Platform(format!(
                "create returned status {status}: {body}"
            )));
        }

        response
            .json()
            .await
            .map_err(|e| RelayError::Platform(format!("failed to decode create response: {e}")))
    }

    /// End an active conversation.
    ///
    /// # Errors
    ///
    /// Returns `RelayError::Platform` on transport failure or a
    /// non-success status.
    pub async fn end_conversation(&self, conversation_id: &str) -> Result<(), RelayError> {
        let url = format!("{}/{}/end", self.api_url, conversation_id);

        let response = HTTP_CLIENT
            .post(&url)
            .header("x-api-key", &self.api_key)
            .send()
            .await
            .map_err(|e| RelayError::Platform(format!("end request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = read_body(response).await;
            return Err(RelayError::Platform(format!(
                "end returned status {status}: {body}"
            )));
        }

        Ok(())
    }

    /// Fetch a conversation with verbose event detail, which is the only
    /// view that carries transcripts.
    ///
    /// # Errors
    ///
    /// Returns `RelayError::Platform` on transport failure, a
    /// non-success status, or an undecodable response body.
    pub async fn get_conversation(
        &self,
        conversation_id: &str,
    ) -> Result<ConversationDetail, RelayError> {
        let url = format!("{}/{}?verbose=true", self.api_url, conversation_id);

        let response = HTTP_CLIENT
            .get(&url)
            .header("x-api-key", &self.api_key)
            .send()
            .await
            .map_err(|e| RelayError::Platform(format!("detail request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = read_body(response).await;
            return Err(RelayError::Platform(format!(
                "detail returned status {status}: {body}"
            )));
        }

        response
            .json()
            .await
            .map_err(|e| RelayError::Platform(format!("failed to decode conversation detail: {e}")))
    }
}
