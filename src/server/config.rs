//! Server configuration.

use std::net::SocketAddr;
use thiserror::Error;

/// Address the server binds to when `SUMMARIZER_BIND_ADDR` is unset.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3051";

/// Server configuration errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServerConfigError {
    /// The bind address is not `host:port`.
    #[error("invalid bind address '{value}': expected host:port")]
    InvalidBindAddr { value: String },
}

/// Configuration of the HTTP service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Socket address to listen on.
    pub bind_addr: SocketAddr,
}

impl ServerConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `SUMMARIZER_BIND_ADDR` is set but unparseable.
    pub fn from_env() -> Result<Self, ServerConfigError> {
        match std::env::var("SUMMARIZER_BIND_ADDR") {
            Ok(value) => Self::parse(&value),
            Err(_) => Self::parse(DEFAULT_BIND_ADDR),
        }
    }

    fn parse(value: &str) -> Result<Self, ServerConfigError> {
        value
            .trim()
            .parse()
            .map(|bind_addr| Self { bind_addr })
            .map_err(|_| ServerConfigError::InvalidBindAddr {
                value: value.to_string(),
            })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3051)),
        }
    }
}
