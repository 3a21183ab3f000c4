//! HTTP response parser for the Gemini API.

use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::time::Duration;

use super::http::HttpResponse;
use crate::error::{map_http_status_with_body, GeminiError, RateLimitError, ServerError};

/// Parser for HTTP responses from the Gemini API.
pub struct ResponseParser;

impl ResponseParser {
    /// Deserializes a 2xx response, or maps any other status to an error.
    pub fn parse_response<T: DeserializeOwned>(response: HttpResponse) -> Result<T, GeminiError> {
        if (200..300).contains(&response.status) {
            Ok(serde_json::from_slice(&response.body)?)
        } else {
            Err(Self::parse_error_response(&response))
        }
    }

    /// Maps an error response to a `GeminiError`, carrying `Retry-After`
    /// into rate limit and unavailability errors.
    pub fn parse_error_response(response: &HttpResponse) -> GeminiError {
        let retry_after = Self::parse_retry_after(&response.headers);
        let mut error = map_http_status_with_body(response.status, &response.body);

        match &mut error {
            GeminiError::RateLimit(
                RateLimitError::TooManyRequests { retry_after: ra }
                | RateLimitError::QuotaExceeded { retry_after: ra },
            )
            | GeminiError::Server(ServerError::ServiceUnavailable { retry_after: ra }) => {
                *ra = retry_after;
            }
            _ => {}
        }

        if let Some(id) = Self::extract_request_id(&response.headers) {
            tracing::debug!(
                request_id = %id,
                status = response.status,
                error = ?error,
                "API error occurred"
            );
        }

        error
    }

    /// Parses a `Retry-After` header given in seconds.
    ///
    /// ```
    /// use integrations_summarizer::transport::ResponseParser;
    /// use std::collections::HashMap;
    /// use std::time::Duration;
    ///
    /// let mut headers = HashMap::new();
    /// headers.insert("retry-after".to_string(), "60".to_string());
    ///
    /// assert_eq!(
    ///     ResponseParser::parse_retry_after(&headers),
    ///     Some(Duration::from_secs(60))
    /// );
    /// ```
    pub fn parse_retry_after(headers: &HashMap<String, String>) -> Option<Duration> {
        headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case("retry-after"))
            .and_then(|(_, value)| value.trim().parse::<u64>().ok())
            .map(Duration::from_secs)
    }

    /// Extracts the request ID from response headers for debugging.
    pub fn extract_request_id(headers: &HashMap<String, String>) -> Option<String> {
        const REQUEST_ID_HEADERS: [&str; 3] = ["x-request-id", "x-goog-request-id", "request-id"];

        headers
            .iter()
            .find(|(key, _)| {
                REQUEST_ID_HEADERS
                    .iter()
                    .any(|candidate| key.eq_ignore_ascii_case(candidate))
            })
            .map(|(_, value)| value.clone())
    }
}
