//! Main error type for the Gemini binding.

use std::time::Duration;
use thiserror::Error;

use super::categories::{
    AuthenticationError, ConfigurationError, ContentError, NetworkError, RateLimitError,
    RequestError, ResourceError, ResponseError, ServerError,
};
use crate::transport::TransportError;

/// Result type alias for Gemini operations.
pub type GeminiResult<T> = Result<T, GeminiError>;

/// Top-level error type for the Gemini binding.
///
/// This is the provider's taxonomy. The summarizer hands it back to its
/// caller untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeminiError {
    /// Invalid or missing configuration.
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// Credential rejected.
    #[error("Authentication error: {0}")]
    Authentication(#[from] AuthenticationError),

    /// Request rejected.
    #[error("Request error: {0}")]
    Request(#[from] RequestError),

    /// Rate limited or out of quota.
    #[error("Rate limit error: {0}")]
    RateLimit(#[from] RateLimitError),

    /// No response from the provider.
    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    /// Provider-side failure.
    #[error("Server error: {0}")]
    Server(#[from] ServerError),

    /// Malformed or empty response.
    #[error("Response error: {0}")]
    Response(#[from] ResponseError),

    /// Safety or policy block.
    #[error("Content error: {0}")]
    Content(#[from] ContentError),

    /// Unknown resource.
    #[error("Resource error: {0}")]
    Resource(#[from] ResourceError),
}

impl GeminiError {
    /// Returns the retry-after duration if the provider sent one.
    ///
    /// Nothing in this crate retries; the value is surfaced for callers.
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            GeminiError::RateLimit(e) => e.retry_after(),
            GeminiError::Server(ServerError::ServiceUnavailable { retry_after }) => *retry_after,
            _ => None,
        }
    }
}

impl From<TransportError> for GeminiError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Timeout => GeminiError::Network(NetworkError::Timeout),
            other => GeminiError::Network(NetworkError::ConnectionFailed {
                message: other.to_string(),
            }),
        }
    }
}

impl From<serde_json::Error> for GeminiError {
    fn from(err: serde_json::Error) -> Self {
        GeminiError::Response(ResponseError::DeserializationError {
            message: err.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retry_after() {
        let rate_limit = GeminiError::RateLimit(RateLimitError::TooManyRequests {
            retry_after: Some(Duration::from_secs(30)),
        });
        assert_eq!(rate_limit.retry_after(), Some(Duration::from_secs(30)));

        let config_error = GeminiError::Configuration(ConfigurationError::MissingApiKey);
        assert_eq!(config_error.retry_after(), None);
    }

    #[test]
    fn test_transport_timeout_maps_to_network_timeout() {
        let error: GeminiError = TransportError::Timeout.into();
        assert_eq!(error, GeminiError::Network(NetworkError::Timeout));
    }

    #[test]
    fn test_transport_connection_maps_to_connection_failed() {
        let error: GeminiError = TransportError::Connection("refused".into()).into();
        match error {
            GeminiError::Network(NetworkError::ConnectionFailed { message }) => {
                assert!(message.contains("refused"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
