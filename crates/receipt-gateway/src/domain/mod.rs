//! Gateway configuration and error handling.

pub mod config;
pub mod error;

pub use config::{ConfigError, CorsConfig, GatewayConfig, LimitsConfig, LoggingConfig, TimeoutConfig};
pub use error::{ApiError, ApiResult, GatewayError};
