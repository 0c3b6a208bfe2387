//! # Receipt Processor
//!
//! Serves the receipt gateway over an in-memory store.
//!
//! ## Startup Sequence
//!
//! 1. Load configuration from `RP_*` environment variables
//! 2. Install the logging subscriber
//! 3. Create the in-memory store and gateway
//! 4. Serve until Ctrl-C

use anyhow::{Context, Result};
use receipt_core::InMemoryReceiptStore;
use receipt_gateway::{init_logging, GatewayConfig, ReceiptGatewayService};
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    let config = GatewayConfig::from_env();
    init_logging(&config.logging).context("failed to initialize logging")?;

    info!(
        version = receipt_gateway::VERSION,
        addr = %config.http_addr(),
        "Receipt processor starting"
    );

    let store = Arc::new(InMemoryReceiptStore::new());
    let mut service =
        ReceiptGatewayService::new(config, store).context("failed to create gateway")?;

    let shutdown = service
        .shutdown_handle()
        .context("shutdown handle already taken")?;
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Shutdown signal received"),
            Err(e) => error!(error = %e, "Failed to listen for shutdown signal"),
        }
        let _ = shutdown.send(());
    });

    service.start().await.context("gateway terminated")?;

    info!("Receipt processor stopped");
    Ok(())
}
