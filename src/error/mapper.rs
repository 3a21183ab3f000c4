//! Mapping of HTTP status codes and Google API error bodies to `GeminiError`.

use serde::Deserialize;

use super::categories::{
    AuthenticationError, NetworkError, RateLimitError, RequestError, ResourceError, ServerError,
    ValidationDetail,
};
use super::types::GeminiError;

/// Structured API error response from Gemini.
#[derive(Debug, Deserialize)]
pub struct ApiErrorResponse {
    /// The error payload.
    pub error: ApiErrorDetail,
}

/// Detailed error information from the API.
#[derive(Debug, Deserialize)]
pub struct ApiErrorDetail {
    /// HTTP-like numeric code.
    #[serde(default)]
    pub code: i32,
    /// Human readable message.
    #[serde(default)]
    pub message: String,
    /// Canonical status such as `INVALID_ARGUMENT`.
    #[serde(default)]
    pub status: String,
    /// Structured details, shape varies per error.
    #[serde(default)]
    pub details: Vec<serde_json::Value>,
}

/// Maps an HTTP status code and response body to a `GeminiError`.
///
/// The body is parsed as a Google API error when possible; otherwise the raw
/// body text becomes the message.
pub fn map_http_status_with_body(status: u16, body: &[u8]) -> GeminiError {
    let parsed = serde_json::from_slice::<ApiErrorResponse>(body).ok();
    let message = parsed
        .as_ref()
        .map(|r| r.error.message.clone())
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| String::from_utf8_lossy(body).to_string());
    let api_status = parsed
        .as_ref()
        .map(|r| r.error.status.to_uppercase())
        .unwrap_or_default();

    match status {
        400 if parsed
            .as_ref()
            .is_some_and(|r| has_error_reason(&r.error.details, "API_KEY_INVALID")) =>
        {
            GeminiError::Authentication(AuthenticationError::InvalidApiKey)
        }

        400 => {
            let details = parsed
                .as_ref()
                .map(|r| parse_validation_details(&r.error.details))
                .unwrap_or_default();
            GeminiError::Request(RequestError::ValidationError { message, details })
        }

        401 => GeminiError::Authentication(AuthenticationError::InvalidApiKey),

        403 => {
            if message.to_lowercase().contains("quota") {
                GeminiError::Authentication(AuthenticationError::QuotaExceeded)
            } else {
                GeminiError::Authentication(AuthenticationError::PermissionDenied { message })
            }
        }

        404 => GeminiError::Resource(ResourceError::ModelNotFound {
            model: extract_resource_name(&message),
        }),

        413 => {
            let (size, max_size) = extract_size_info(&message);
            GeminiError::Request(RequestError::PayloadTooLarge { size, max_size })
        }

        // retry_after is filled in from headers by the response parser
        429 => {
            if api_status == "RESOURCE_EXHAUSTED" && message.to_lowercase().contains("quota") {
                GeminiError::RateLimit(RateLimitError::QuotaExceeded { retry_after: None })
            } else {
                GeminiError::RateLimit(RateLimitError::TooManyRequests { retry_after: None })
            }
        }

        500 => GeminiError::Server(ServerError::InternalError { message }),

        503 => {
            if message.to_lowercase().contains("overload") {
                GeminiError::Server(ServerError::ModelOverloaded {
                    model: extract_resource_name(&message),
                })
            } else {
                GeminiError::Server(ServerError::ServiceUnavailable { retry_after: None })
            }
        }

        _ if !api_status.is_empty() => map_api_error(&api_status, message),

        _ => GeminiError::Server(ServerError::InternalError {
            message: format!("HTTP {status}: {message}"),
        }),
    }
}

/// Maps a canonical Google API status string to a `GeminiError`.
pub fn map_api_error(error_type: &str, message: String) -> GeminiError {
    match error_type {
        "INVALID_ARGUMENT" | "FAILED_PRECONDITION" | "OUT_OF_RANGE" => {
            GeminiError::Request(RequestError::ValidationError {
                message,
                details: vec![],
            })
        }
        "UNAUTHENTICATED" => GeminiError::Authentication(AuthenticationError::InvalidApiKey),
        "PERMISSION_DENIED" => {
            GeminiError::Authentication(AuthenticationError::PermissionDenied { message })
        }
        "NOT_FOUND" => GeminiError::Resource(ResourceError::ModelNotFound {
            model: extract_resource_name(&message),
        }),
        "RESOURCE_EXHAUSTED" => {
            GeminiError::RateLimit(RateLimitError::QuotaExceeded { retry_after: None })
        }
        "UNAVAILABLE" => GeminiError::Server(ServerError::ServiceUnavailable { retry_after: None }),
        "DEADLINE_EXCEEDED" => GeminiError::Network(NetworkError::Timeout),
        "INTERNAL" | "ABORTED" => GeminiError::Server(ServerError::InternalError { message }),
        _ => GeminiError::Server(ServerError::InternalError {
            message: format!("{error_type}: {message}"),
        }),
    }
}

/// Pulls a `models/...` path or a quoted name out of an error message.
fn extract_resource_name(message: &str) -> String {
    if let Some(found) = message
        .split_whitespace()
        .find(|s| s.starts_with("models/"))
    {
        return found
            .trim_matches(|c: char| !c.is_alphanumeric() && c != '/' && c != '-' && c != '_' && c != '.')
            .to_string();
    }

    for quote in ['\'', '"'] {
        if let Some(start) = message.find(quote) {
            if let Some(end) = message[start + 1..].find(quote) {
                return message[start + 1..start + 1 + end].to_string();
            }
        }
    }

    "unknown".to_string()
}

/// Reads "size N exceeds max M" style numbers out of a message.
fn extract_size_info(message: &str) -> (usize, usize) {
    let numbers: Vec<usize> = message
        .split_whitespace()
        .filter_map(|s| s.trim_matches(|c: char| !c.is_numeric()).parse().ok())
        .collect();

    match numbers.as_slice() {
        [] => (0, 0),
        [size] => (*size, 0),
        [size, max, ..] => (*size, *max),
    }
}

/// True when an `ErrorInfo` detail carries `reason`.
fn has_error_reason(details: &[serde_json::Value], reason: &str) -> bool {
    details
        .iter()
        .any(|d| d.get("reason").and_then(|r| r.as_str()) == Some(reason))
}

fn parse_validation_details(details: &[serde_json::Value]) -> Vec<ValidationDetail> {
    details
        .iter()
        .filter_map(|detail| detail.as_object())
        .flat_map(|obj| {
            // BadRequest details nest their entries under fieldViolations
            let violations = obj
                .get("fieldViolations")
                .and_then(|v| v.as_array())
                .map(|arr| arr.iter().filter_map(|v| v.as_object()).collect::<Vec<_>>())
                .unwrap_or_else(|| vec![obj]);

            violations.into_iter().filter_map(|entry| {
                let field = entry
                    .get("field")
                    .or_else(|| entry.get("fieldPath"))
                    .and_then(|v| v.as_str())
                    .unwrap_or("unknown");
                let description = entry
                    .get("description")
                    .or_else(|| entry.get("message"))
                    .and_then(|v| v.as_str())
                    .unwrap_or("");

                (!description.is_empty()).then(|| ValidationDetail {
                    field: field.to_string(),
                    description: description.to_string(),
                })
            })
        })
        .collect()
}
