//! Client for the dashboard that stores finished summary records.

use super::{HTTP_CLIENT, read_body};
use crate::errors::RelayError;
use crate::models::SummaryRecord;

pub struct DashboardClient {
    record_url: String,
    api_key: String,
}

impl DashboardClient {
    #[must_use]
    pub fn new(base_url: String, record_path: String, api_key: String) -> Self {
        Self {
            record_url: format!("{base_url}{record_path}"),
            api_key,
        }
    }

    /// Push one normalized summary record to the dashboard.
    ///
    /// # Errors
    ///
    /// Returns `RelayError::Dashboard` on transport failure or any
    /// non-success status.
    pub async fn push_summary(&self, record: &SummaryRecord) -> Result<(), RelayError> {
        let response = HTTP_CLIENT
            .post(&self.record_url)
            .bearer_auth(&self.api_key)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(record)
            .send()
            .await
            .map_err(|e| RelayError::Dashboard(format!("record POST failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = read_body(response).await;
            return Err(RelayError::Dashboard(format!(
                "record POST returned status {status}: {body}"
            )));
        }

        Ok(())
    }
}
