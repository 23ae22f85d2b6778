use std::env;

/// Process-wide configuration, read once at startup.
///
/// Keys for the two upstream services the relay cannot function without
/// are required; everything else falls back to the defaults the service
/// was deployed with.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub conversations_api_url: String,
    pub conversations_api_key: String,
    pub replica_id: Option<String>,
    pub persona_id: Option<String>,
    pub callback_url: Option<String>,
    pub summarizer_api_url: String,
    pub summarizer_api_key: String,
    pub summarizer_model: String,
    pub dashboard_url: String,
    pub dashboard_record_path: String,
    pub dashboard_api_key: String,
    pub scheduling_api_url: String,
    pub scheduling_api_key: String,
    pub scheduling_event_type_id: i64,
}

impl AppConfig {
    /// Creates configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or a numeric
    /// variable fails to parse.
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()
                .map_err(|e| format!("PORT: {}", e))?,
            conversations_api_url: env::var("CONVERSATIONS_API_URL")
                .unwrap_or_else(|_| "https://tavusapi.com/v2/conversations".to_string()),
            conversations_api_key: env::var("CONVERSATIONS_API_KEY")
                .map_err(|e| format!("CONVERSATIONS_API_KEY: {}", e))?,
            replica_id: env::var("REPLICA_ID").ok(),
            persona_id: env::var("PERSONA_ID").ok(),
            callback_url: env::var("CALLBACK_URL").ok(),
            summarizer_api_url: env::var("SUMMARIZER_API_URL")
                .unwrap_or_else(|_| "https://api.sarvam.ai/v1/chat/completions".to_string()),
            summarizer_api_key: env::var("SUMMARIZER_API_KEY")
                .map_err(|e| format!("SUMMARIZER_API_KEY: {}", e))?,
            summarizer_model: env::var("SUMMARIZER_MODEL")
                .unwrap_or_else(|_| "sarvam-m".to_string()),
            dashboard_url: env::var("DASHBOARD_URL")
                .unwrap_or_else(|_| "http://localhost:8000".to_string()),
            dashboard_record_path: env::var("DASHBOARD_RECORD_PATH")
                .unwrap_or_else(|_| "/api/moms/new".to_string()),
            dashboard_api_key: env::var("DASHBOARD_API_KEY").unwrap_or_default(),
            scheduling_api_url: env::var("SCHEDULING_API_URL")
                .unwrap_or_else(|_| "https://api.cal.com/v2".to_string()),
            scheduling_api_key: env::var("SCHEDULING_API_KEY").unwrap_or_default(),
            scheduling_event_type_id: env::var("SCHEDULING_EVENT_TYPE_ID")
                .unwrap_or_else(|_| "2698509".to_string())
                .parse()
                .map_err(|e| format!("SCHEDULING_EVENT_TYPE_ID: {}", e))?,
        })
    }
}
