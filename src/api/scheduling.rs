//! Handlers for the scheduling endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::{Value, json};
use tracing::error;

use super::helpers::error_response;
use super::state::AppState;
use crate::clients::scheduling::{BookingAttempt, BookingsFetch, merge_unavailable};

const REQUIRED_BOOKING_FIELDS: [&str; 4] = ["name", "email", "phone", "start"];

/// `GET /free-slots`.
///
/// Relays the availability schedules with existing bookings appended
/// as `unavailable` windows.
pub async fn free_slots(State(state): State<Arc<AppState>>) -> Response {
    let schedules = match state.scheduling.fetch_schedules().await {
        Ok(schedules) => schedules,
        Err(e) => {
            error!("Failed to fetch schedules: {}", e);
            return error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch data from scheduling service",
            );
        }
    };

    match state.scheduling.fetch_bookings().await {
        Ok(BookingsFetch::Fetched(bookings)) => {
            Json(merge_unavailable(schedules, &bookings)).into_response()
        }
        Ok(BookingsFetch::Refused(status)) => {
            error!("Bookings fetch refused with status {}", status);
            error_response(
                StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                &format!("Failed to fetch bookings, status code: {status}"),
            )
        }
        Err(e) => {
            error!("Failed to fetch bookings: {}", e);
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch data from scheduling service",
            )
        }
    }
}

/// `POST /new-schedule`.
///
/// Validates the booking request, then relays the scheduling service's
/// verdict: 201 with the booking on success, otherwise the upstream
/// status with a diagnostic message.
pub async fn new_schedule(State(state): State<Arc<AppState>>, Json(body): Json<Value>) -> Response {
    for field in REQUIRED_BOOKING_FIELDS {
        if body.get(field).is_none() {
            return error_response(
                StatusCode::BAD_REQUEST,
                &format!("Missing required field: {field}"),
            );
        }
    }

    let payload = build_booking_payload(&body, state.config.scheduling_event_type_id);

    match state.scheduling.create_booking(&payload).await {
        Ok(BookingAttempt::Created(booking)) => {
            (StatusCode::CREATED, Json(booking)).into_response()
        }
        Ok(BookingAttempt::Rejected { status, message }) => {
            error!("Booking rejected with status {}: {}", status, message);
            error_response(
                StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                &format!("Failed to create booking, status code: {status}, message: {message}"),
            )
        }
        Err(e) => {
            error!("Failed to create booking: {}", e);
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to create booking",
            )
        }
    }
}

/// Shape the outbound booking payload around the validated request.
/// Field values are forwarded as received.
fn build_booking_payload(body: &Value, event_type_id: i64) -> Value {
    json!({
        "start": body.get("start"),
        "attendee": {
            "name": body.get("name"),
            "email": body.get("email"),
            "phoneNumber": body.get("phone"),
            "language": "en",
            "timeZone": "Asia/Kolkata",
        },
        "eventTypeId": event_type_id,
    })
}
