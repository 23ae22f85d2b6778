//! Inbound HTTP surface: router, shared state, and request handlers.

pub mod conversations;
pub mod helpers;
pub mod routes;
pub mod scheduling;
pub mod state;

// Re-export the router entry points for convenience
pub use routes::create_router;
pub use state::AppState;
