#![deny(unused)]
//! Estate Chat - Real-estate chat gateway
//!
//! Routes each website chat message through an orchestrator agent that
//! delegates to sale, rent, website and contact agents backed by a hosted
//! completion model.

use std::sync::Arc;

use estate_chat_controller::{build_orchestrator, RunConfig, Runner};
use estate_chat_core::{config::AppConfig, traits::LlmClient};
use estate_chat_gateway::{GatewayConfig, GatewayServer};
use estate_chat_store::StaticDataStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Configuration comes first: a missing provider key stops startup.
    let config = AppConfig::load()?;

    estate_chat_telemetry::configure_tracing(&config.telemetry)?;
    tracing::info!("Starting Estate Chat v{}", env!("CARGO_PKG_VERSION"));

    let metrics_handle = estate_chat_telemetry::setup_metrics_recorder()?;

    // =========================================================================
    // Completion client
    // =========================================================================
    let llm = Arc::new(estate_chat_model_gateway::create_client_from_config(&config.model)?);
    tracing::info!(
        model = %llm.model(),
        endpoint = %llm.endpoint(),
        "Completion client initialized"
    );

    // =========================================================================
    // Agents
    // =========================================================================
    let runner = Runner::new(
        llm,
        RunConfig {
            max_turns: config.runner.max_turns,
        },
    );
    let orchestrator = build_orchestrator(runner, StaticDataStore::new()).await?;

    // =========================================================================
    // Gateway
    // =========================================================================
    let server = GatewayServer::new(GatewayConfig::from_app_config(&config), Arc::new(orchestrator))
        .with_metrics(metrics_handle);

    server.run().await?;

    Ok(())
}
