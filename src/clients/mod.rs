//! Client modules for the upstream services the relay fronts

pub mod conversations;
pub mod dashboard;
pub mod scheduling;

pub use conversations::ConversationsClient;
pub use dashboard::DashboardClient;
pub use scheduling::SchedulingClient;

use std::time::Duration;

use once_cell::sync::Lazy;
use reqwest::Client;

/// Shared HTTP client with a conservative timeout. Every outbound
/// request in the process goes through this client.
pub(crate) static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .expect("Failed to create HTTP client")
});

/// Read an error response body for diagnostics, tolerating bodies that
/// cannot be read.
pub(crate) async fn read_body(response: reqwest::Response) -> String {
    response
        .text()
        .await
        .unwrap_or_else(|e| format!("<unreadable body: {e}>"))
}
