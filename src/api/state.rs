//! Shared application state.

use crate::ai::SummarizerClient;
use crate::clients::{ConversationsClient, DashboardClient, SchedulingClient};
use crate::config::AppConfig;

/// Configuration plus the upstream clients, built once at startup and
/// shared read-only across request tasks.
pub struct AppState {
    pub config: AppConfig,
    pub conversations: ConversationsClient,
    pub summarizer: SummarizerClient,
    pub dashboard: DashboardClient,
    pub scheduling: SchedulingClient,
}

impl AppState {
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        let conversations = ConversationsClient::new(
            config.conversations_api_url.clone(),
            config.conversations_api_key.clone(),
        );
        let summarizer = SummarizerClient::new(
            config.summarizer_api_url.clone(),
            config.summarizer_api_key.clone(),
            config.summarizer_model.clone(),
        );
        let dashboard = DashboardClient::new(
            config.dashboard_url.clone(),
            config.dashboard_record_path.clone(),
            config.dashboard_api_key.clone(),
        );
        let scheduling = SchedulingClient::new(
            config.scheduling_api_url.clone(),
            config.scheduling_api_key.clone(),
        );

        Self {
            config,
            conversations,
            summarizer,
            dashboard,
            scheduling,
        }
    }
}
