//! Router assembly.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

use super::state::AppState;
use super::{conversations, scheduling};

/// Build the relay router. CORS is wide open: any origin, method, or
/// header, attached to every response, with preflights answered by the
/// layer itself.
pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(home))
        .route(
            "/start-conversation",
            post(conversations::start_conversation),
        )
        .route("/end/{conversation_id}", post(conversations::end_conversation))
        .route(
            "/conversation/{conversation_id}",
            get(conversations::conversation_summary),
        )
        .route("/free-slots", get(scheduling::free_slots))
        .route("/new-schedule", post(scheduling::new_schedule))
        .layer(cors)
        .with_state(state)
}

/// Liveness probe.
async fn home() -> &'static str {
    "Frontdesk relay is running!"
}
