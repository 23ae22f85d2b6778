//! Shared plumbing for integration tests: serve a router on an
//! ephemeral port and wire a relay instance to a mock upstream.

use std::sync::Arc;

use axum::Router;

use frontdesk::api::{AppState, create_router};
use frontdesk::config::AppConfig;

/// Serve `router` on an ephemeral port and return its base URL.
pub async fn spawn_server(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn relay_config(upstream: &str) -> AppConfig {
    AppConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        conversations_api_url: format!("{upstream}/v2/conversations"),
        conversations_api_key: "platform-key".to_string(),
        replica_id: Some("r-1".to_string()),
        persona_id: Some("p-1".to_string()),
        callback_url: Some("http://localhost/callback".to_string()),
        summarizer_api_url: format!("{upstream}/v1/chat/completions"),
        summarizer_api_key: "summarizer-key".to_string(),
        summarizer_model: "test-model".to_string(),
        dashboard_url: upstream.to_string(),
        dashboard_record_path: "/api/moms/new".to_string(),
        dashboard_api_key: "dashboard-key".to_string(),
        scheduling_api_url: format!("{upstream}/v2"),
        scheduling_api_key: "scheduling-key".to_string(),
        scheduling_event_type_id: 42,
    }
}

/// Spin up the relay with every upstream pointed at `upstream`, and
/// return the relay's base URL.
pub async fn spawn_relay(upstream: &str) -> String {
    let state = Arc::new(AppState::new(relay_config(upstream)));
    spawn_server(create_router(state)).await
}
