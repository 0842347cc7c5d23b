use chat_relay_service::config::RelayConfig;
use chat_relay_service::startup::Application;
use dotenvy::dotenv;
use service_core::observability::init_tracing;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    init_tracing("chat-relay-service", "info");

    let config = RelayConfig::load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    let app = Application::build(config).await?;
    info!("Chat relay listening on port {}", app.port());

    app.run_until_stopped().await.map_err(|e| {
        tracing::error!("Server error: {}", e);
        anyhow::anyhow!("Server error: {}", e)
    })?;

    Ok(())
}
