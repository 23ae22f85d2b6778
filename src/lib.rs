/// Frontdesk - a thin HTTP relay between a browser frontend, a video
/// conversation platform, an AI summarization service, a scheduling
/// service, and a dashboard.
///
/// The relay keeps all upstream credentials server-side and exposes a
/// small JSON API the frontend can call directly. Its one real piece of
/// logic is the summarization pipeline behind
/// `GET /conversation/{conversation_id}`: fetch the conversation's
/// event log, locate the usable transcript, have the model distill it
/// into a fixed-schema record, and push that record to the dashboard.
///
/// # Endpoints
///
/// - `GET /` - liveness probe
/// - `POST /start-conversation` - create a video conversation
/// - `POST /end/{conversation_id}` - end an active conversation
/// - `GET /conversation/{conversation_id}` - summarize and store
/// - `GET /free-slots` - availability merged with existing bookings
/// - `POST /new-schedule` - book a meeting slot
// Module declarations
pub mod ai;
pub mod api;
pub mod clients;
pub mod config;
pub mod errors;
pub mod models;
pub mod summary;

/// Configure structured logging for the relay process.
///
/// Honors `RUST_LOG` when set and defaults to `info` otherwise. Call
/// once at startup.
///
/// # Example
///
/// ```no_run
/// frontdesk::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);

    tracing_subscriber::registry().with(filter).with(fmt_layer).init();
}
