//! Configuration loading and constants.
//!
//! Loads application configuration from an optional TOML file, applies the
//! `PORT` environment override, and defines constants for routes, headers,
//! logging and default values. `AppConfig` is the root configuration struct.

use const_format::formatcp;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::Path;

// =============================================================================
// Routes
// =============================================================================

/// Global API prefix, applied to every route except metrics
pub const API_PREFIX: &str = "api/v1";

/// Health endpoint, served at the prefix root
pub const HEALTH_PATH: &str = formatcp!("/{}", API_PREFIX);

/// Prometheus scrape endpoint, excluded from the API prefix
pub const METRICS_PATH: &str = "/metrics";

// =============================================================================
// HTTP Response Headers
// =============================================================================

/// Liveness and metrics must never be served from an upstream cache
pub const CACHE_CONTROL_NO_STORE: &str = "no-store";

/// Response header carrying the per-request correlation ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

// =============================================================================
// Health Payload
// =============================================================================

/// Message returned by the health endpoint
pub const HEALTH_MESSAGE: &str = "API is running";

// =============================================================================
// Server Lifecycle
// =============================================================================

/// Time allowed for in-flight requests to finish after a shutdown signal
pub const SHUTDOWN_GRACE_PERIOD_SECS: u64 = 30;

// =============================================================================
// Defaults
// =============================================================================

/// Environment variable overriding `http.port`
pub const PORT_ENV_VAR: &str = "PORT";

/// Default bind host (all interfaces)
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default TCP port when neither config nor `PORT` sets one
pub const DEFAULT_PORT: u16 = 8080;

/// Host name used in the startup announcement URLs
pub const DEFAULT_PUBLIC_HOST: &str = "localhost";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "vitals=info,tower_http=info";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: String,
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
    /// Host shown in the "running on" log lines
    #[serde(default = "HttpServerConfig::default_public_host")]
    pub public_host: String,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
            public_host: Self::default_public_host(),
        }
    }
}

impl HttpServerConfig {
    fn default_host() -> String {
        DEFAULT_HOST.to_string()
    }
    fn default_port() -> u16 {
        DEFAULT_PORT
    }
    fn default_public_host() -> String {
        DEFAULT_PUBLIC_HOST.to_string()
    }

    /// Resolves `host:port` into a bindable socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| {
                ConfigError::Validation(format!(
                    "Invalid http.host or http.port ({}:{}): {}",
                    self.host, self.port, e
                ))
            })
    }

    /// Base URL announced at startup, e.g. `http://localhost:8080`.
    pub fn public_url(&self, port: u16) -> String {
        format!("http://{}:{}", self.public_host, port)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default = "LoggingConfig::default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_LOG_FORMAT.to_string(),
        }
    }
}

impl LoggingConfig {
    fn default_format() -> String {
        DEFAULT_LOG_FORMAT.to_string()
    }

    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Builds the effective configuration: file (if given) or defaults,
    /// then the `PORT` environment variable on top.
    pub fn resolve(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.apply_port_override(std::env::var(PORT_ENV_VAR).ok().as_deref())?;
        Ok(config)
    }

    /// Applies a raw `PORT` value. `None` leaves the configured port alone.
    pub fn apply_port_override(&mut self, raw: Option<&str>) -> Result<(), ConfigError> {
        let Some(raw) = raw else {
            return Ok(());
        };
        let port = raw.trim().parse::<u16>().map_err(|e| {
            ConfigError::Validation(format!("{PORT_ENV_VAR} must be a TCP port, got {raw:?}: {e}"))
        })?;
        self.http.port = port;
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        match self.logging.format.to_ascii_lowercase().as_str() {
            "text" | "json" => {}
            other => {
                return Err(ConfigError::Validation(format!(
                    "logging.format must be \"text\" or \"json\", got {other:?}"
                )))
            }
        }
        self.http.socket_addr()?;
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}
