use thiserror::Error;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Conversation platform request failed: {0}")]
    Platform(String),

    #[error("Summarizer request failed: {0}")]
    Summarizer(String),

    #[error("Dashboard request failed: {0}")]
    Dashboard(String),

    #[error("Scheduling service request failed: {0}")]
    Scheduling(String),

    #[error("No usable transcript in conversation {0}")]
    TranscriptNotFound(String),

    #[error("Failed to send HTTP request: {0}")]
    Http(String),
}

impl From<reqwest::Error> for RelayError {
    fn from(error: reqwest::Error) -> Self {
        RelayError::Http(error.to_string())
    }
}
