//! Receipt Gateway - HTTP interface for the receipt processor.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │               RECEIPT GATEWAY                │
//! ├──────────────────────────────────────────────┤
//! │  HTTP :5000                                  │
//! │  POST /receipts/process                      │
//! │  GET  /receipts/:id/points                   │
//! │  GET  /health   GET /metrics                 │
//! │                     │                        │
//! │  ┌──────────────────┴───────────────────┐    │
//! │  │           Middleware Stack           │    │
//! │  │  CORS → Tracing → Timeout → BodyLimit│    │
//! │  └──────────────────┬───────────────────┘    │
//! └─────────────────────┼────────────────────────┘
//!                       │
//!               ReceiptProcessorApi
//!                       │
//!                 receipt-core
//! ```
//!
//! Every failure leaves the gateway as `{"description": "..."}` with status
//! 400 (invalid receipt), 404 (unknown id) or 504 (timeout).
//!
//! # Usage
//!
//! ```ignore
//! use receipt_core::InMemoryReceiptStore;
//! use receipt_gateway::{GatewayConfig, ReceiptGatewayService};
//! use std::sync::Arc;
//!
//! let mut service = ReceiptGatewayService::new(
//!     GatewayConfig::default(),
//!     Arc::new(InMemoryReceiptStore::new()),
//! )?;
//! service.start().await?;
//! ```

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod domain;
pub mod middleware;
pub mod router;
pub mod service;
pub mod telemetry;

// Re-exports for public API
pub use domain::config::GatewayConfig;
pub use domain::error::{ApiError, ApiResult, GatewayError};
pub use middleware::{GatewayMetrics, MetricsSnapshot};
pub use router::{build_router, AppState, PointsResponse, ProcessResponse};
pub use service::ReceiptGatewayService;
pub use telemetry::init_logging;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
