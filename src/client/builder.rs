//! Builder for creating summarizer instances.

use secrecy::SecretString;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

use super::GeminiSummarizer;
use crate::auth::ApiKeyAuthManager;
use crate::config::{api_key_from_env, AuthMethod, LogLevel, SummarizerConfig};
use crate::error::{ConfigurationError, GeminiError, NetworkError};
use crate::generator::GeminiTextGenerator;
use crate::observability::{Logger, StructuredLogger};
use crate::services::ContentServiceImpl;
use crate::summarizer::Summarizer;
use crate::transport::{HttpTransport, ReqwestTransport};

/// Builder for a [`GeminiSummarizer`].
///
/// # Example
///
/// ```no_run
/// use integrations_summarizer::SummarizerBuilder;
/// use secrecy::SecretString;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let summarizer = SummarizerBuilder::new()
///     .api_key(SecretString::new("your-api-key".into()))
///     .model("gemini-pro")
///     .build()?;
///
/// let summary = summarizer.summarize("A long article...").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct SummarizerBuilder {
    api_key: Option<SecretString>,
    base_url: Option<Url>,
    api_version: Option<String>,
    model: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    auth_method: Option<AuthMethod>,
    log_level: Option<LogLevel>,

    // Injectable dependencies for testing
    transport: Option<Arc<dyn HttpTransport>>,
    logger: Option<Arc<dyn Logger>>,
}

impl SummarizerBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder from an existing configuration.
    pub fn from_config(config: SummarizerConfig) -> Self {
        Self {
            api_key: Some(config.api_key),
            base_url: Some(config.base_url),
            api_version: Some(config.api_version),
            model: Some(config.model),
            timeout: config.timeout,
            connect_timeout: config.connect_timeout,
            auth_method: Some(config.auth_method),
            log_level: Some(config.log_level),
            transport: None,
            logger: None,
        }
    }

    /// Sets the API key.
    pub fn api_key(mut self, key: SecretString) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the base URL for the API.
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the base URL from a string.
    pub fn base_url_str(mut self, url: &str) -> Result<Self, GeminiError> {
        let parsed = Url::parse(url).map_err(|_| ConfigurationError::InvalidBaseUrl {
            url: url.to_string(),
        })?;
        self.base_url = Some(parsed);
        Ok(self)
    }

    /// Sets the API version.
    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = Some(version.into());
        self
    }

    /// Sets the model asked for summaries.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Sets the connection timeout.
    pub fn connect_timeout(mut self, duration: Duration) -> Self {
        self.connect_timeout = Some(duration);
        self
    }

    /// Sets the authentication method.
    pub fn auth_method(mut self, method: AuthMethod) -> Self {
        self.auth_method = Some(method);
        self
    }

    /// Sets the log level of the default logger.
    pub fn log_level(mut self, level: LogLevel) -> Self {
        self.log_level = Some(level);
        self
    }

    /// Sets a custom HTTP transport (for testing).
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Sets a custom logger (for testing).
    pub fn logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Resolves the configuration this builder describes.
    ///
    /// The API key comes from the builder, then `GEMINI_API_KEY`, then
    /// `GOOGLE_API_KEY`.
    pub fn build_config(&self) -> Result<SummarizerConfig, GeminiError> {
        let api_key = self
            .api_key
            .clone()
            .or_else(api_key_from_env)
            .ok_or(ConfigurationError::MissingApiKey)?;

        let mut builder = SummarizerConfig::builder().api_key(api_key);

        if let Some(url) = &self.base_url {
            builder = builder.base_url(url.as_str())?;
        }
        if let Some(version) = &self.api_version {
            builder = builder.api_version(version);
        }
        if let Some(model) = &self.model {
            builder = builder.model(model);
        }
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = self.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(method) = self.auth_method {
            builder = builder.auth_method(method);
        }
        if let Some(level) = self.log_level {
            builder = builder.log_level(level);
        }

        builder.build()
    }

    /// Builds the summarizer.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - no API key is given and none is found in the environment
    /// - a configuration value is invalid
    /// - the HTTP transport cannot be created
    pub fn build(self) -> Result<GeminiSummarizer, GeminiError> {
        let config = self.build_config()?;

        let transport: Arc<dyn HttpTransport> = match self.transport {
            Some(t) => t,
            None => Arc::new(
                ReqwestTransport::new(config.timeout, config.connect_timeout).map_err(|e| {
                    NetworkError::ConnectionFailed {
                        message: format!("Failed to create HTTP transport: {e}"),
                    }
                })?,
            ),
        };

        let auth_manager = ApiKeyAuthManager::from_config(&config);

        let logger: Arc<dyn Logger> = self.logger.unwrap_or_else(|| {
            Arc::new(StructuredLogger::new("summarizer").with_level(config.log_level))
        });

        logger.info(
            "Summarizer initialized",
            serde_json::json!({
                "base_url": config.base_url.as_str(),
                "api_version": config.api_version,
                "model": config.model,
                "auth_method": format!("{:?}", config.auth_method),
            }),
        );

        let content = ContentServiceImpl::new(&config, transport, &auth_manager, logger);
        let generator = GeminiTextGenerator::new(Arc::new(content), config.model.clone());

        Ok(Summarizer::new(generator))
    }
}
