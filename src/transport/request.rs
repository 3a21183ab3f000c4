//! HTTP request builder for the Gemini API.

use bytes::Bytes;
use serde::Serialize;
use std::collections::HashMap;
use url::Url;

use super::http::{HttpMethod, HttpRequest};
use crate::auth::AuthManager;
use crate::error::{ConfigurationError, GeminiError};

/// Builder for constructing HTTP requests to the Gemini API.
///
/// Handles URL construction with the API version prefix, authentication
/// through the configured auth manager, and JSON body serialization.
#[derive(Clone)]
pub struct RequestBuilder {
    base_url: Url,
    api_version: String,
    auth_manager: Box<dyn AuthManager>,
}

impl RequestBuilder {
    /// Creates a new request builder.
    ///
    /// A base URL with a path prefix (a proxy, say) keeps that prefix.
    pub fn new(mut base_url: Url, api_version: String, auth_manager: Box<dyn AuthManager>) -> Self {
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Self {
            base_url,
            api_version,
            auth_manager,
        }
    }

    /// Builds a complete URL for the given endpoint path.
    ///
    /// ```
    /// use integrations_summarizer::auth::ApiKeyAuthManager;
    /// use integrations_summarizer::config::AuthMethod;
    /// use integrations_summarizer::transport::RequestBuilder;
    /// use secrecy::SecretString;
    /// use url::Url;
    ///
    /// let builder = RequestBuilder::new(
    ///     Url::parse("https://generativelanguage.googleapis.com").unwrap(),
    ///     "v1beta".to_string(),
    ///     Box::new(ApiKeyAuthManager::new(SecretString::new("k".into()), AuthMethod::Header)),
    /// );
    /// let url = builder.build_url("/models/gemini-pro:generateContent").unwrap();
    /// assert_eq!(
    ///     url.as_str(),
    ///     "https://generativelanguage.googleapis.com/v1beta/models/gemini-pro:generateContent"
    /// );
    /// ```
    pub fn build_url(&self, path: &str) -> Result<Url, GeminiError> {
        let path = path.trim_start_matches('/');
        let full_path = format!("{}/{}", self.api_version, path);
        let mut url = self.base_url.join(&full_path).map_err(|e| {
            ConfigurationError::InvalidConfiguration {
                message: format!("cannot build request URL for '{full_path}': {e}"),
            }
        })?;

        if let Some((key, value)) = self.auth_manager.get_auth_query_param() {
            url.query_pairs_mut().append_pair(&key, &value);
        }

        Ok(url)
    }

    /// Builds an HTTP request, serializing `body` as JSON when present.
    pub fn build_request<T: Serialize>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&T>,
    ) -> Result<HttpRequest, GeminiError> {
        let url = self.build_url(path)?;

        let mut headers = HashMap::new();

        if body.is_some() {
            headers.insert("Content-Type".to_string(), "application/json".to_string());
        }

        if let Some((key, value)) = self.auth_manager.get_auth_header() {
            headers.insert(key, value);
        }

        let body_bytes = body
            .map(|body| serde_json::to_vec(body).map(Bytes::from))
            .transpose()?;

        Ok(HttpRequest {
            method,
            url: url.to_string(),
            headers,
            body: body_bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::ApiKeyAuthManager;
    use crate::config::{AuthMethod, SummarizerConfig};
    use secrecy::SecretString;

    #[derive(Serialize)]
    struct TestBody {
        message: String,
    }

    fn create_test_builder(auth_method: AuthMethod) -> RequestBuilder {
        let config = SummarizerConfig::builder()
            .api_key(SecretString::new("test-api-key".into()))
            .auth_method(auth_method)
            .build()
            .unwrap();

        let auth_manager = ApiKeyAuthManager::from_config(&config);

        RequestBuilder::new(config.base_url, config.api_version, Box::new(auth_manager))
    }

    #[test]
    fn test_build_url_with_version() {
        let builder = create_test_builder(AuthMethod::Header);
        let url = builder.build_url("/models/gemini-pro:generateContent").unwrap();

        assert!(url.as_str().ends_with("/v1beta/models/gemini-pro:generateContent"));
        assert!(url.query().is_none());
    }

    #[test]
    fn test_build_url_with_query_param_auth() {
        let builder = create_test_builder(AuthMethod::QueryParam);
        let url = builder.build_url("/models/gemini-pro:generateContent").unwrap();

        assert_eq!(url.query(), Some("key=test-api-key"));
    }

    #[test]
    fn test_build_url_keeps_base_path_prefix() {
        let builder = RequestBuilder::new(
            Url::parse("http://localhost:8080/proxy").unwrap(),
            "v1beta".to_string(),
            Box::new(ApiKeyAuthManager::new(
                SecretString::new("k".into()),
                AuthMethod::Header,
            )),
        );
        let url = builder.build_url("models/gemini-pro:generateContent").unwrap();

        assert_eq!(
            url.as_str(),
            "http://localhost:8080/proxy/v1beta/models/gemini-pro:generateContent"
        );
    }

    #[test]
    fn test_build_request_with_body_and_header_auth() {
        let builder = create_test_builder(AuthMethod::Header);
        let body = TestBody {
            message: "test".to_string(),
        };

        let request = builder
            .build_request(HttpMethod::Post, "/models/gemini-pro:generateContent", Some(&body))
            .unwrap();

        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(
            request.headers.get("Content-Type").map(String::as_str),
            Some("application/json")
        );
        assert_eq!(
            request.headers.get("x-goog-api-key").map(String::as_str),
            Some("test-api-key")
        );
        assert_eq!(request.body.as_deref(), Some(&br#"{"message":"test"}"#[..]));
    }

    #[test]
    fn test_build_request_without_body() {
        let builder = create_test_builder(AuthMethod::QueryParam);
        let request = builder
            .build_request::<TestBody>(HttpMethod::Get, "/models", None)
            .unwrap();

        assert!(!request.headers.contains_key("Content-Type"));
        assert!(!request.headers.contains_key("x-goog-api-key"));
        assert!(request.body.is_none());
    }
}
