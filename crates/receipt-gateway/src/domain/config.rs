//! Gateway configuration with validation.
//!
//! Defaults can be overridden from the environment with `GatewayConfig::from_env`.

use serde::{Deserialize, Serialize};
use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;
use tracing::warn;

/// Main gateway configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// HTTP server configuration
    pub http: HttpConfig,
    /// Request validation limits
    pub limits: LimitsConfig,
    /// Timeout configuration
    pub timeouts: TimeoutConfig,
    /// CORS configuration
    pub cors: CorsConfig,
    /// Log output configuration
    pub logging: LoggingConfig,
}

impl GatewayConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.http.port == 0 {
            return Err(ConfigError::InvalidPort);
        }

        if self.limits.max_request_size == 0 {
            return Err(ConfigError::InvalidLimit(
                "max_request_size cannot be 0".into(),
            ));
        }

        if self.timeouts.request.is_zero() {
            return Err(ConfigError::InvalidTimeout(
                "request timeout cannot be 0".into(),
            ));
        }

        Ok(())
    }

    /// Get HTTP server bind address
    pub fn http_addr(&self) -> SocketAddr {
        SocketAddr::new(self.http.host, self.http.port)
    }

    /// Build configuration from defaults plus environment overrides.
    ///
    /// # Environment Variables
    ///
    /// - `RP_HOST`: Bind address (default: 0.0.0.0)
    /// - `RP_PORT`: HTTP port (default: 5000)
    /// - `RP_MAX_REQUEST_SIZE`: Maximum request body in bytes (default: 1 MiB)
    /// - `RP_REQUEST_TIMEOUT`: Per-request timeout, e.g. `10s`, `500ms` (default: 10s)
    /// - `RP_LOG_LEVEL`: Log filter when `RUST_LOG` is unset (default: info)
    /// - `RP_JSON_LOGS`: Emit JSON log lines (default: false)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(host) = env_parse::<IpAddr>("RP_HOST") {
            config.http.host = host;
        }
        if let Some(port) = env_parse::<u16>("RP_PORT") {
            config.http.port = port;
        }
        if let Some(size) = env_parse::<usize>("RP_MAX_REQUEST_SIZE") {
            config.limits.max_request_size = size;
        }
        if let Ok(raw) = env::var("RP_REQUEST_TIMEOUT") {
            match humantime_serde::parse_duration(&raw) {
                Ok(timeout) => config.timeouts.request = timeout,
                Err(e) => warn!(value = %raw, error = e, "Ignoring RP_REQUEST_TIMEOUT"),
            }
        }
        if let Ok(level) = env::var("RP_LOG_LEVEL") {
            config.logging.level = level;
        }
        if let Some(json) = env_parse::<bool>("RP_JSON_LOGS") {
            config.logging.json = json;
        }

        config
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(key, value = %raw, "Ignoring malformed environment override");
            None
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Bind address
    pub host: IpAddr,
    /// Port (default: 5000)
    pub port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0)),
            port: 5000,
        }
    }
}

/// Request limits
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum request body size in bytes
    pub max_request_size: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_request_size: 1024 * 1024,
        }
    }
}

/// Timeout configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Upper bound on a single request
    #[serde(with = "humantime_serde")]
    pub request: Duration,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            request: Duration::from_secs(10),
        }
    }
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Enable CORS
    pub enabled: bool,
    /// Allowed origins ("*" for all)
    pub allowed_origins: Vec<String>,
    /// Allowed methods
    pub allowed_methods: Vec<String>,
    /// Allowed headers ("*" for all)
    pub allowed_headers: Vec<String>,
    /// Max age for preflight cache, in seconds
    pub max_age: u64,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            allowed_origins: vec!["*".to_string()],
            allowed_methods: vec!["GET".to_string(), "POST".to_string(), "OPTIONS".to_string()],
            allowed_headers: vec!["Content-Type".to_string()],
            max_age: 86400,
        }
    }
}

/// Log output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is not set
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("HTTP port cannot be 0")]
    InvalidPort,

    #[error("invalid limit: {0}")]
    InvalidLimit(String),

    #[error("invalid timeout: {0}")]
    InvalidTimeout(String),
}

/// Duration (de)serialization as `"10s"`, `"500ms"`, `"2m"`, or plain seconds.
mod humantime_serde {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{}ms", duration.as_millis()))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_duration(&s).map_err(serde::de::Error::custom)
    }

    pub fn parse_duration(s: &str) -> Result<Duration, &'static str> {
        let s = s.trim();
        // "ms" must be checked before the bare "m" and "s" suffixes.
        if let Some(ms) = s.strip_suffix("ms") {
            ms.trim()
                .parse::<u64>()
                .map(Duration::from_millis)
                .map_err(|_| "invalid milliseconds")
        } else if let Some(secs) = s.strip_suffix('s') {
            secs.trim()
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|_| "invalid seconds")
        } else if let Some(mins) = s.strip_suffix('m') {
            mins.trim()
                .parse::<u64>()
                .ok()
                .and_then(|m| m.checked_mul(60))
                .map(Duration::from_secs)
                .ok_or("invalid minutes")
        } else {
            s.parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|_| "invalid duration format")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GatewayConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.http.port, 5000);
        assert_eq!(config.http_addr().port(), 5000);
        assert_eq!(config.timeouts.request, Duration::from_secs(10));
    }

    #[test]
    fn test_zero_port_rejected() {
        let mut config = GatewayConfig::default();
        config.http.port = 0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidPort));
    }

    #[test]
    fn test_zero_limit_rejected() {
        let mut config = GatewayConfig::default();
        config.limits.max_request_size = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidLimit(_))
        ));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = GatewayConfig::default();
        config.timeouts.request = Duration::ZERO;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidTimeout(_))
        ));
    }

    #[test]
    fn test_parse_duration_formats() {
        use humantime_serde::parse_duration;
        assert_eq!(parse_duration("10s"), Ok(Duration::from_secs(10)));
        assert_eq!(parse_duration("250ms"), Ok(Duration::from_millis(250)));
        assert_eq!(parse_duration("2m"), Ok(Duration::from_secs(120)));
        assert_eq!(parse_duration("7"), Ok(Duration::from_secs(7)));
        assert!(parse_duration("soon").is_err());
        assert_eq!(
            parse_duration(&format!("{}m", u64::MAX)),
            Err("invalid minutes")
        );
    }

    #[test]
    fn test_partial_json_config_keeps_defaults() {
        let config: GatewayConfig = serde_json::from_str(
            r#"{"http": {"port": 8080}, "timeouts": {"request": "500ms"}}"#,
        )
        .unwrap();
        assert_eq!(config.http.port, 8080);
        assert_eq!(config.timeouts.request, Duration::from_millis(500));
        assert_eq!(config.limits.max_request_size, 1024 * 1024);
        assert!(config.cors.enabled);
    }
}
