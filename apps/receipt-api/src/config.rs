//! Receipt API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

/// Receipt API configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// HTTP listen port
    pub port: u16,

    /// Interface to bind
    pub bind_address: IpAddr,

    /// Per-request deadline
    pub request_timeout: Duration,

    /// How long in-flight requests may drain after a shutdown signal
    pub shutdown_grace: Duration,

    /// Default log filter when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            port: 8080,
            bind_address: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            request_timeout: Duration::from_secs(30),
            shutdown_grace: Duration::from_secs(30),
            log_level: "info".to_string(),
        }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ApiConfig::default();

        let parse = |key: &str| -> Result<Option<u64>, ConfigError> {
            lookup(key)
                .map(|v| v.trim().parse().map_err(|_| ConfigError::InvalidValue(key.to_string())))
                .transpose()
        };

        let port = match lookup("PORT") {
            Some(v) => v
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("PORT".to_string()))?,
            None => defaults.port,
        };

        let bind_address = match lookup("BIND_ADDRESS") {
            Some(v) => v
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("BIND_ADDRESS".to_string()))?,
            None => defaults.bind_address,
        };

        let request_timeout = parse("REQUEST_TIMEOUT_SECS")?
            .map(Duration::from_secs)
            .unwrap_or(defaults.request_timeout);

        let shutdown_grace = parse("SHUTDOWN_GRACE_SECS")?
            .map(Duration::from_secs)
            .unwrap_or(defaults.shutdown_grace);

        let log_level = lookup("LOG_LEVEL").unwrap_or(defaults.log_level);

        if request_timeout.is_zero() {
            return Err(ConfigError::InvalidValue("REQUEST_TIMEOUT_SECS".to_string()));
        }

        Ok(ApiConfig {
            port,
            bind_address,
            request_timeout,
            shutdown_grace,
            log_level,
        })
    }

    /// Address the server listens on.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_address, self.port)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
