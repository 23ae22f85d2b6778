use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use frontdesk::api::{AppState, create_router};
use frontdesk::config::AppConfig;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    frontdesk::setup_logging();

    let config = AppConfig::from_env()
        .map_err(|e| anyhow::anyhow!(e))
        .context("failed to load configuration")?;
    let bind_addr = format!("{}:{}", config.host, config.port);

    let state = Arc::new(AppState::new(config));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    info!("Frontdesk relay listening on {}", bind_addr);

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
