//! Error category types reported by the Gemini binding.

use std::time::Duration;
use thiserror::Error;

/// Configuration-related errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// No credential was supplied explicitly or through the environment.
    #[error("Missing API key")]
    MissingApiKey,

    /// The endpoint could not be parsed as a URL.
    #[error("Invalid base URL: {url}")]
    InvalidBaseUrl { url: String },

    /// Any other rejected setting.
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },
}

/// Authentication-related errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthenticationError {
    /// The provider rejected the credential.
    #[error("Invalid API key")]
    InvalidApiKey,

    /// The credential is valid but lacks permission for the call.
    #[error("Permission denied: {message}")]
    PermissionDenied { message: String },

    /// The project behind the credential is out of quota.
    #[error("Quota exceeded for API key")]
    QuotaExceeded,
}

/// Request validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// The request was rejected, locally or by the provider.
    #[error("Validation error: {message}")]
    ValidationError { message: String, details: Vec<ValidationDetail> },

    /// The request body exceeds what the provider accepts.
    #[error("Payload too large: {size} bytes (max: {max_size})")]
    PayloadTooLarge { size: usize, max_size: usize },
}

/// Validation detail for field-level errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationDetail {
    /// Path of the offending field, e.g. `contents[0].parts`.
    pub field: String,
    /// Human readable reason.
    pub description: String,
}

/// Rate limiting errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RateLimitError {
    /// HTTP 429.
    #[error("Too many requests")]
    TooManyRequests { retry_after: Option<Duration> },

    /// `RESOURCE_EXHAUSTED` reported in the error body.
    #[error("Quota exceeded")]
    QuotaExceeded { retry_after: Option<Duration> },
}

impl RateLimitError {
    /// Delay suggested by the provider, if it sent one.
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            RateLimitError::TooManyRequests { retry_after }
            | RateLimitError::QuotaExceeded { retry_after } => *retry_after,
        }
    }
}

/// Network-related errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    /// The request never produced a response.
    #[error("Connection failed: {message}")]
    ConnectionFailed { message: String },

    /// A configured timeout elapsed.
    #[error("Request timed out")]
    Timeout,
}

/// Server-side errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServerError {
    /// HTTP 500 or any unmapped status.
    #[error("Internal server error: {message}")]
    InternalError { message: String },

    /// HTTP 503.
    #[error("Service unavailable")]
    ServiceUnavailable { retry_after: Option<Duration> },

    /// HTTP 503 whose message says the model is overloaded.
    #[error("Model overloaded: {model}")]
    ModelOverloaded { model: String },
}

/// Response parsing errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResponseError {
    /// The body was not the JSON we expected.
    #[error("Failed to deserialize response: {message}")]
    DeserializationError { message: String },

    /// The response decoded but carries no text to return.
    #[error("Response contained no text")]
    EmptyResponse,
}

/// Content safety errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    /// The prompt or a candidate tripped a safety filter.
    #[error("Content blocked due to safety: {reason}")]
    SafetyBlocked {
        reason: String,
        safety_ratings: Vec<SafetyRatingInfo>,
    },

    /// The candidate was stopped for reciting source material.
    #[error("Content blocked due to recitation")]
    RecitationBlocked {
        safety_ratings: Vec<SafetyRatingInfo>,
    },

    /// Blocklist or prohibited-content terms.
    #[error("Prohibited content detected")]
    ProhibitedContent,
}

/// Information about a safety rating for error reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafetyRatingInfo {
    /// Harm category, as reported.
    pub category: String,
    /// Harm probability, as reported.
    pub probability: String,
}

/// Resource-related errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResourceError {
    /// HTTP 404: the configured model does not exist.
    #[error("Model not found: {model}")]
    ModelNotFound { model: String },
}
