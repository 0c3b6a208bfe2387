//! Receipt gateway service - owns the router and the HTTP server lifecycle.

use crate::domain::config::GatewayConfig;
use crate::domain::error::GatewayError;
use crate::middleware::GatewayMetrics;
use crate::router::{build_router, AppState};
use axum::Router;
use receipt_core::{ReceiptService, ReceiptStore};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tracing::info;

/// Receipt gateway service state
pub struct ReceiptGatewayService {
    config: GatewayConfig,
    state: AppState,
    shutdown_tx: Option<oneshot::Sender<()>>,
    shutdown_rx: Option<oneshot::Receiver<()>>,
}

impl ReceiptGatewayService {
    /// Create a new gateway over the given receipt store
    pub fn new(config: GatewayConfig, store: Arc<dyn ReceiptStore>) -> Result<Self, GatewayError> {
        config
            .validate()
            .map_err(|e| GatewayError::Config(e.to_string()))?;

        let api = Arc::new(ReceiptService::new(store));
        let metrics = Arc::new(GatewayMetrics::new());
        let (shutdown_tx, shutdown_rx) = oneshot::channel();

        Ok(Self {
            config,
            state: AppState::new(api, metrics),
            shutdown_tx: Some(shutdown_tx),
            shutdown_rx: Some(shutdown_rx),
        })
    }

    /// Get metrics
    pub fn metrics(&self) -> Arc<GatewayMetrics> {
        Arc::clone(&self.state.metrics)
    }

    /// Build the HTTP router
    pub fn router(&self) -> Router {
        build_router(self.state.clone(), &self.config)
    }

    /// Take the sender that triggers graceful shutdown.
    ///
    /// Returns `None` after the first call.
    pub fn shutdown_handle(&mut self) -> Option<oneshot::Sender<()>> {
        self.shutdown_tx.take()
    }

    /// Bind the configured address and serve until shutdown.
    pub async fn start(&mut self) -> Result<(), GatewayError> {
        let addr = self.config.http_addr();
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| GatewayError::Bind(format!("{}: {}", addr, e)))?;

        self.serve(listener).await
    }

    /// Serve on an already bound listener until shutdown.
    ///
    /// Shutdown happens when the handle from `shutdown_handle` fires or is
    /// dropped.
    pub async fn serve(&mut self, listener: TcpListener) -> Result<(), GatewayError> {
        let shutdown_rx = self.shutdown_rx.take();
        self.serve_with_shutdown(listener, async move {
            if let Some(rx) = shutdown_rx {
                let _ = rx.await;
            }
        })
        .await
    }

    /// Serve on `listener` until `signal` resolves.
    pub async fn serve_with_shutdown<F>(
        &self,
        listener: TcpListener,
        signal: F,
    ) -> Result<(), GatewayError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        info!(addr = %addr, "Starting receipt gateway");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(signal)
            .await?;

        info!("Receipt gateway stopped");
        Ok(())
    }
}
