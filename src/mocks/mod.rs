//! Mock implementations for testing.
//!
//! These stand in for the network, the credential and the text-generation
//! capability so the summarizer and the Gemini binding can be exercised in
//! isolation.

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::auth::AuthManager;
use crate::error::GeminiError;
use crate::generator::TextGenerator;
use crate::transport::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, TransportError};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
}

/// Mock HTTP transport for testing.
///
/// Responses are enqueued up front and handed out in order; every request is
/// recorded for later inspection.
///
/// ```
/// use integrations_summarizer::mocks::MockHttpTransport;
/// use integrations_summarizer::transport::{HttpMethod, HttpRequest, HttpTransport};
/// use std::collections::HashMap;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let transport = MockHttpTransport::new();
/// transport.enqueue_json_response(200, r#"{"status": "ok"}"#);
///
/// let request = HttpRequest {
///     method: HttpMethod::Get,
///     url: "https://example.com".to_string(),
///     headers: HashMap::new(),
///     body: None,
/// };
///
/// let response = transport.send(request).await.unwrap();
/// assert_eq!(response.status, 200);
/// transport.verify_request_count(1);
/// # });
/// ```
#[derive(Clone, Default)]
pub struct MockHttpTransport {
    responses: Arc<Mutex<VecDeque<Result<HttpResponse, TransportError>>>>,
    requests: Arc<Mutex<Vec<HttpRequest>>>,
}

impl MockHttpTransport {
    /// Create a new mock HTTP transport.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue a response to be returned by the next request.
    pub fn enqueue_response(&self, response: Result<HttpResponse, TransportError>) {
        lock(&self.responses).push_back(response);
    }

    /// Enqueue a JSON response with the given status code and body.
    pub fn enqueue_json_response(&self, status: u16, body: &str) {
        self.enqueue_json_response_with_headers(status, body, &[]);
    }

    /// Enqueue a JSON response with extra headers (`Retry-After`, request ids).
    pub fn enqueue_json_response_with_headers(
        &self,
        status: u16,
        body: &str,
        extra_headers: &[(&str, &str)],
    ) {
        let mut headers = HashMap::new();
        headers.insert("content-type".to_string(), "application/json".to_string());
        for (name, value) in extra_headers {
            headers.insert((*name).to_string(), (*value).to_string());
        }

        self.enqueue_response(Ok(HttpResponse {
            status,
            headers,
            body: Bytes::from(body.to_string()),
        }));
    }

    /// Enqueue a transport failure.
    pub fn enqueue_error(&self, error: TransportError) {
        self.enqueue_response(Err(error));
    }

    /// Get all requests that were made.
    pub fn get_requests(&self) -> Vec<HttpRequest> {
        lock(&self.requests).clone()
    }

    /// Get the last request that was made.
    pub fn last_request(&self) -> Option<HttpRequest> {
        lock(&self.requests).last().cloned()
    }

    /// Verify that exactly `expected` requests were made.
    pub fn verify_request_count(&self, expected: usize) {
        let actual = lock(&self.requests).len();
        assert_eq!(actual, expected, "Expected {expected} requests, got {actual}");
    }

    /// Verify that a request was made with the expected method and URL.
    pub fn verify_request(&self, index: usize, method: HttpMethod, url_contains: &str) {
        let requests = lock(&self.requests);
        assert!(index < requests.len(), "No request at index {index}");

        let request = &requests[index];
        assert_eq!(
            request.method, method,
            "Expected method {method:?}, got {:?}",
            request.method
        );
        assert!(
            request.url.contains(url_contains),
            "Expected URL to contain '{url_contains}', got '{}'",
            request.url
        );
    }

    /// Verify that a request carried a specific header.
    pub fn verify_header(&self, index: usize, header_name: &str, header_value: &str) {
        let requests = lock(&self.requests);
        assert!(index < requests.len(), "No request at index {index}");

        let actual_value = requests[index].headers.get(header_name);
        assert_eq!(
            actual_value.map(String::as_str),
            Some(header_value),
            "Expected header '{header_name}' to be '{header_value}', got {actual_value:?}"
        );
    }

    /// Decode the JSON body of the request at `index`.
    #[allow(clippy::panic)]
    pub fn request_json(&self, index: usize) -> serde_json::Value {
        let requests = lock(&self.requests);
        let body = requests
            .get(index)
            .and_then(|r| r.body.as_ref())
            .unwrap_or_else(|| panic!("No request body at index {index}"));
        serde_json::from_slice(body)
            .unwrap_or_else(|e| panic!("Request body at index {index} is not JSON: {e}"))
    }
}

#[async_trait]
impl HttpTransport for MockHttpTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        lock(&self.requests).push(request);

        lock(&self.responses).pop_front().unwrap_or_else(|| {
            Err(TransportError::Connection(
                "No response configured in MockHttpTransport".into(),
            ))
        })
    }
}

/// Mock authentication manager for testing.
///
/// ```
/// use integrations_summarizer::auth::AuthManager;
/// use integrations_summarizer::mocks::MockAuthManager;
///
/// let auth = MockAuthManager::new("test-api-key");
/// assert_eq!(
///     auth.get_auth_header(),
///     Some(("x-goog-api-key".to_string(), "test-api-key".to_string()))
/// );
/// ```
#[derive(Clone)]
pub struct MockAuthManager {
    api_key: String,
    use_header: bool,
}

impl MockAuthManager {
    /// Create a mock that authenticates with a header.
    pub fn new(api_key: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            use_header: true,
        }
    }

    /// Create a mock that authenticates with the `key` query parameter.
    pub fn with_query_param(api_key: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            use_header: false,
        }
    }
}

impl AuthManager for MockAuthManager {
    fn get_auth_header(&self) -> Option<(String, String)> {
        self.use_header
            .then(|| ("x-goog-api-key".to_string(), self.api_key.clone()))
    }

    fn get_auth_query_param(&self) -> Option<(String, String)> {
        (!self.use_header).then(|| ("key".to_string(), self.api_key.clone()))
    }

    fn clone_box(&self) -> Box<dyn AuthManager> {
        Box::new(self.clone())
    }
}

/// Scripted [`TextGenerator`] for testing.
///
/// Clones share state, so a test can keep one handle for assertions while
/// the summarizer owns another.
#[derive(Clone, Default)]
pub struct MockTextGenerator {
    responses: Arc<Mutex<VecDeque<Result<String, GeminiError>>>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockTextGenerator {
    /// Create a mock with nothing enqueued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue generated text for the next call.
    pub fn enqueue_text(&self, text: impl Into<String>) {
        lock(&self.responses).push_back(Ok(text.into()));
    }

    /// Enqueue a failure for the next call.
    pub fn enqueue_error(&self, error: GeminiError) {
        lock(&self.responses).push_back(Err(error));
    }

    /// Prompts received so far, in order.
    pub fn prompts(&self) -> Vec<String> {
        lock(&self.prompts).clone()
    }

    /// Number of times `generate` was called.
    pub fn call_count(&self) -> usize {
        lock(&self.prompts).len()
    }
}

#[async_trait]
impl TextGenerator for MockTextGenerator {
    type Error = GeminiError;

    async fn generate(&self, prompt: &str) -> Result<String, GeminiError> {
        lock(&self.prompts).push(prompt.to_string());

        lock(&self.responses).pop_front().unwrap_or_else(|| {
            Err(crate::error::ServerError::InternalError {
                message: "No response configured in MockTextGenerator".into(),
            }
            .into())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NetworkError;

    fn get(url: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: url.to_string(),
            headers: HashMap::new(),
            body: None,
        }
    }

    #[tokio::test]
    async fn test_mock_transport_multiple_responses() {
        let transport = MockHttpTransport::new();
        transport.enqueue_json_response(200, r#"{"id": 1}"#);
        transport.enqueue_json_response(201, r#"{"id": 2}"#);

        let response1 = transport.send(get("https://example.com/1")).await.unwrap();
        let response2 = transport.send(get("https://example.com/2")).await.unwrap();

        assert_eq!(response1.status, 200);
        assert_eq!(response2.status, 201);
        transport.verify_request_count(2);
        transport.verify_request(1, HttpMethod::Get, "/2");
    }

    #[tokio::test]
    async fn test_mock_transport_without_response_fails() {
        let transport = MockHttpTransport::new();

        let result = transport.send(get("https://example.com")).await;

        assert!(matches!(result, Err(TransportError::Connection(_))));
    }

    #[test]
    fn test_mock_auth_manager_query_param() {
        let auth = MockAuthManager::with_query_param("test-key");

        assert!(auth.get_auth_header().is_none());
        assert_eq!(
            auth.get_auth_query_param(),
            Some(("key".to_string(), "test-key".to_string()))
        );
    }

    #[tokio::test]
    async fn test_mock_generator_replays_in_order() {
        let generator = MockTextGenerator::new();
        generator.enqueue_text("first");
        generator.enqueue_error(NetworkError::Timeout.into());

        assert_eq!(generator.generate("a").await.unwrap(), "first");
        assert_eq!(
            generator.generate("b").await.unwrap_err(),
            GeminiError::Network(NetworkError::Timeout)
        );
        assert!(generator.generate("c").await.is_err());
        assert_eq!(generator.prompts(), vec!["a", "b", "c"]);
    }
}
