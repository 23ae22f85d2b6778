//! Client for the external scheduling service.
//!
//! Availability reads and booking writes are pinned to different
//! versions of the upstream API; the version header is part of each
//! endpoint's wire contract.

use serde_json::{Value, json};

use super::{HTTP_CLIENT, read_body};
use crate::errors::RelayError;

const SCHEDULES_API_VERSION: &str = "2024-06-11";
const BOOKINGS_API_VERSION: &str = "2024-08-13";

/// Outcome of the bookings fetch. A non-200 status is relayed to the
/// caller rather than treated as a hard failure.
#[derive(Debug)]
pub enum BookingsFetch {
    Fetched(Value),
    Refused(u16),
}

/// Outcome of a booking attempt. Anything but 201 is a rejection whose
/// status and body the caller relays.
#[derive(Debug)]
pub enum BookingAttempt {
    Created(Value),
    Rejected { status: u16, message: String },
}

pub struct SchedulingClient {
    base_url: String,
    api_key: String,
}

impl SchedulingClient {
    #[must_use]
    pub fn new(base_url: String, api_key: String) -> Self {
        Self { base_url, api_key }
    }

    /// Fetch the account's availability schedules.
    ///
    /// # Errors
    ///
    /// Returns `RelayError::Http` on transport failure and
    /// `RelayError::Scheduling` on a non-success status or an
    /// undecodable response body.
    pub async fn fetch_schedules(&self) -> Result<Value, RelayError> {
        let url = format!("{}/schedules", self.base_url);

        let response = HTTP_CLIENT
            .get(&url)
            .bearer_auth(&self.api_key)
            .header("cal-api-version", SCHEDULES_API_VERSION)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = read_body(response).await;
            return Err(RelayError::Scheduling(format!(
                "schedules returned status {status}: {body}"
            )));
        }

        response
            .json()
            .await
            .map_err(|e| RelayError::Scheduling(format!("failed to decode schedules: {e}")))
    }

    /// Fetch existing bookings.
    ///
    /// # Errors
    ///
    /// Returns `RelayError::Http` on transport failure and
    /// `RelayError::Scheduling` on an undecodable 200 body. Non-200
    /// statuses are not errors; see [`BookingsFetch::Refused`].
    pub async fn fetch_bookings(&self) -> Result<BookingsFetch, RelayError> {
        let url = format!("{}/bookings", self.base_url);

        let response = HTTP_CLIENT
            .get(&url)
            .bearer_auth(&self.api_key)
            .header("cal-api-version", SCHEDULES_API_VERSION)
            .send()
            .await?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Ok(BookingsFetch::Refused(status.as_u16()));
        }

        let bookings = response
            .json()
            .await
            .map_err(|e| RelayError::Scheduling(format!("failed to decode bookings: {e}")))?;

        Ok(BookingsFetch::Fetched(bookings))
    }

    /// Submit a fully built booking payload.
    ///
    /// # Errors
    ///
    /// Returns `RelayError::Http` on transport failure and
    /// `RelayError::Scheduling` on an undecodable 201 body. Upstream
    /// rejections are not errors; see [`BookingAttempt::Rejected`].
    pub async fn create_booking(&self, payload: &Value) -> Result<BookingAttempt, RelayError> {
        let url = format!("{}/bookings", self.base_url);

        let response = HTTP_CLIENT
            .post(&url)
            .bearer_auth(&self.api_key)
            .header("cal-api-version", BOOKINGS_API_VERSION)
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if status != reqwest::StatusCode::CREATED {
            let message = read_body(response).await;
            return Ok(BookingAttempt::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let booking = response
            .json()
            .await
            .map_err(|e| RelayError::Scheduling(format!("failed to decode booking: {e}")))?;

        Ok(BookingAttempt::Created(booking))
    }
}

/// Append each booking's occupied window onto the schedules document's
/// `data` array as an `unavailable` entry. Bookings missing either
/// endpoint are skipped, as are documents without a `data` array.
#[must_use]
pub fn merge_unavailable(mut schedules: Value, bookings: &Value) -> Value {
    let windows: Vec<Value> = bookings
        .get("data")
        .and_then(|data| data.get("bookings"))
        .and_then(Value::as_array)
        .map(|list| {
            list.iter()
                .filter_map(|booking| {
                    let start = booking.get("startTime").and_then(Value::as_str)?;
                    let end = booking.get("endTime").and_then(Value::as_str)?;
                    if start.is_empty() || end.is_empty() {
                        return None;
                    }
                    Some(json!({
                        "start": start,
                        "end": end,
                        "type": "unavailable",
                    }))
                })
                .collect()
        })
        .unwrap_or_default();

    if let Some(data) = schedules.get_mut("data").and_then(Value::as_array_mut) {
        data.extend(windows);
    }

    schedules
}
