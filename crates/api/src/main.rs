//! EventDesk - HTTP backend for events, users and attendee registration
//!
//! Main entry point for the server binary.

use std::sync::Arc;

use anyhow::Context;
use eventdesk_lib::utils::logging::init_tracing;
use eventdesk_lib::{create_router, AppContext};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env must be applied before the config loader reads the environment
    let dotenv = dotenvy::dotenv();

    let config = eventdesk_infra::config::load().context("failed to load configuration")?;
    init_tracing(&config.logging);

    match dotenv {
        Ok(path) => info!(path = %path.display(), "Loaded .env"),
        Err(e) => warn!("Could not load .env file: {}", e),
    }

    let bind_address = config.server.bind_address();
    let ctx = AppContext::new(config).await.context("failed to initialise application context")?;
    let app = create_router(Arc::new(ctx));

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("failed to bind {bind_address}"))?;
    info!(address = %bind_address, "EventDesk listening");

    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    info!("EventDesk stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", err);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
