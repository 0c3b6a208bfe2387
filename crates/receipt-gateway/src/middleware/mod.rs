//! Middleware stack for the receipt gateway.
//!
//! Layer order: Request → CORS → Tracing → Timeout → BodyLimit → Handler

pub mod cors;
pub mod metrics;
pub mod timeout;
pub mod tracing;

pub use cors::create_cors_layer;
pub use metrics::{GatewayMetrics, MetricsSnapshot};
pub use timeout::TimeoutLayer;
pub use self::tracing::TracingLayer;
