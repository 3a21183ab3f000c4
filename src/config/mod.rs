//! Configuration for the summarizer and its Gemini binding.
//!
//! The configuration is an explicit value built once (from code or from the
//! environment) and handed to the client at construction. Nothing in the
//! crate reads credentials from global state after that point.

use secrecy::SecretString;
use std::fmt;
use std::time::Duration;
use url::Url;

use crate::error::{ConfigurationError, GeminiError};

/// Default Gemini API base URL.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Default API version.
pub const DEFAULT_API_VERSION: &str = "v1beta";

/// Default model used for summaries.
pub const DEFAULT_MODEL: &str = "gemini-pro";

/// Authentication method for the API key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AuthMethod {
    /// Use the `x-goog-api-key` header (recommended).
    #[default]
    Header,
    /// Use the `?key=` query parameter.
    QueryParam,
}

/// Log level for the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum LogLevel {
    /// Only errors.
    Error,
    /// Errors and warnings.
    Warn,
    /// General information.
    #[default]
    Info,
    /// Detailed information.
    Debug,
    /// Very detailed information.
    Trace,
}

/// Configuration for the summarizer.
#[derive(Clone)]
pub struct SummarizerConfig {
    /// API key (required).
    pub api_key: SecretString,
    /// Base URL for the API.
    pub base_url: Url,
    /// API version.
    pub api_version: String,
    /// Model asked for summaries.
    pub model: String,
    /// Overall request timeout. `None` waits for the provider indefinitely.
    pub timeout: Option<Duration>,
    /// Connect timeout. `None` leaves it to the OS.
    pub connect_timeout: Option<Duration>,
    /// Authentication method.
    pub auth_method: AuthMethod,
    /// Log level.
    pub log_level: LogLevel,
}

impl SummarizerConfig {
    /// Create a new configuration builder.
    pub fn builder() -> SummarizerConfigBuilder {
        SummarizerConfigBuilder::default()
    }

    /// Create configuration from environment variables.
    ///
    /// Reads:
    /// - `GEMINI_API_KEY`, falling back to `GOOGLE_API_KEY` (required)
    /// - `GEMINI_BASE_URL`
    /// - `GEMINI_API_VERSION`
    /// - `GEMINI_MODEL`
    /// - `GEMINI_TIMEOUT_SECS`
    /// - `GEMINI_CONNECT_TIMEOUT_SECS`
    pub fn from_env() -> Result<Self, GeminiError> {
        let api_key = api_key_from_env().ok_or(ConfigurationError::MissingApiKey)?;

        let mut builder = Self::builder().api_key(api_key);

        if let Ok(base_url) = std::env::var("GEMINI_BASE_URL") {
            builder = builder.base_url(&base_url)?;
        }
        if let Ok(version) = std::env::var("GEMINI_API_VERSION") {
            builder = builder.api_version(&version);
        }
        if let Ok(model) = std::env::var("GEMINI_MODEL") {
            builder = builder.model(&model);
        }
        if let Some(timeout) = secs_from_env("GEMINI_TIMEOUT_SECS")? {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = secs_from_env("GEMINI_CONNECT_TIMEOUT_SECS")? {
            builder = builder.connect_timeout(timeout);
        }

        builder.build()
    }
}

impl fmt::Debug for SummarizerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SummarizerConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url.as_str())
            .field("api_version", &self.api_version)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .field("connect_timeout", &self.connect_timeout)
            .field("auth_method", &self.auth_method)
            .field("log_level", &self.log_level)
            .finish()
    }
}

/// Reads the credential from `GEMINI_API_KEY` or `GOOGLE_API_KEY`.
///
/// A variable that is set but blank counts as unset, so an empty
/// `GEMINI_API_KEY` still falls back to `GOOGLE_API_KEY`.
pub(crate) fn api_key_from_env() -> Option<SecretString> {
    non_blank_var("GEMINI_API_KEY")
        .or_else(|| non_blank_var("GOOGLE_API_KEY"))
        .map(SecretString::new)
}

fn non_blank_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

/// Reads a timeout in whole seconds. Zero is rejected: reqwest would fail
/// every request immediately.
fn secs_from_env(name: &str) -> Result<Option<Duration>, GeminiError> {
    let Ok(raw) = std::env::var(name) else {
        return Ok(None);
    };

    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Some(Duration::from_secs(secs))),
        _ => Err(ConfigurationError::InvalidConfiguration {
            message: format!("{name} must be a positive whole number of seconds, got '{raw}'"),
        }
        .into()),
    }
}

/// Builder for `SummarizerConfig`.
#[derive(Default)]
pub struct SummarizerConfigBuilder {
    api_key: Option<SecretString>,
    base_url: Option<Url>,
    api_version: Option<String>,
    model: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    auth_method: Option<AuthMethod>,
    log_level: Option<LogLevel>,
}

impl SummarizerConfigBuilder {
    /// Set the API key.
    pub fn api_key(mut self, api_key: SecretString) -> Self {
        self.api_key = Some(api_key);
        self
    }

    /// Set the base URL.
    pub fn base_url(mut self, base_url: &str) -> Result<Self, GeminiError> {
        let url = Url::parse(base_url).map_err(|_| ConfigurationError::InvalidBaseUrl {
            url: base_url.to_string(),
        })?;
        self.base_url = Some(url);
        Ok(self)
    }

    /// Set the API version.
    pub fn api_version(mut self, version: &str) -> Self {
        self.api_version = Some(version.to_string());
        self
    }

    /// Set the model.
    pub fn model(mut self, model: &str) -> Self {
        self.model = Some(model.to_string());
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the connect timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Set the authentication method.
    pub fn auth_method(mut self, method: AuthMethod) -> Self {
        self.auth_method = Some(method);
        self
    }

    /// Set the log level.
    pub fn log_level(mut self, level: LogLevel) -> Self {
        self.log_level = Some(level);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> Result<SummarizerConfig, GeminiError> {
        let api_key = self.api_key.ok_or(ConfigurationError::MissingApiKey)?;

        let base_url = match self.base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_URL).map_err(|_| ConfigurationError::InvalidBaseUrl {
                url: DEFAULT_BASE_URL.to_string(),
            })?,
        };

        let model = self.model.unwrap_or_else(|| DEFAULT_MODEL.to_string());
        if model.trim().is_empty() {
            return Err(ConfigurationError::InvalidConfiguration {
                message: "model name must not be empty".to_string(),
            }
            .into());
        }

        Ok(SummarizerConfig {
            api_key,
            base_url,
            api_version: self
                .api_version
                .unwrap_or_else(|| DEFAULT_API_VERSION.to_string()),
            model,
            timeout: self.timeout,
            connect_timeout: self.connect_timeout,
            auth_method: self.auth_method.unwrap_or_default(),
            log_level: self.log_level.unwrap_or_default(),
        })
    }
}

/// Serialized, self-restoring access to the process environment for tests.
#[cfg(test)]
pub(crate) mod test_env {
    use std::sync::{Mutex, MutexGuard, PoisonError};

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// Every variable the crate reads; all are cleared while a guard lives.
    const MANAGED: [&str; 8] = [
        "GEMINI_API_KEY",
        "GOOGLE_API_KEY",
        "GEMINI_BASE_URL",
        "GEMINI_API_VERSION",
        "GEMINI_MODEL",
        "GEMINI_TIMEOUT_SECS",
        "GEMINI_CONNECT_TIMEOUT_SECS",
        "SUMMARIZER_BIND_ADDR",
    ];

    /// Holds the lock and puts the previous values back on drop.
    pub(crate) struct EnvGuard {
        saved: Vec<(&'static str, Option<String>)>,
        _lock: MutexGuard<'static, ()>,
    }

    impl EnvGuard {
        /// Clears the managed variables, then sets `vars`.
        pub(crate) fn with(vars: &[(&str, &str)]) -> Self {
            let lock = ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
            let saved = MANAGED
                .iter()
                .map(|name| (*name, std::env::var(name).ok()))
                .collect();

            for name in MANAGED {
                std::env::remove_var(name);
            }
            for (name, value) in vars {
                std::env::set_var(name, value);
            }

            Self { saved, _lock: lock }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for (name, value) in &self.saved {
                match value {
                    Some(v) => std::env::set_var(name, v),
                    None => std::env::remove_var(name),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::test_env::EnvGuard;
    use secrecy::ExposeSecret;

    #[test]
    fn test_default_config() {
        let config = SummarizerConfig::builder()
            .api_key(SecretString::new("test-key".into()))
            .build()
            .unwrap();

        assert_eq!(config.base_url.as_str(), "https://generativelanguage.googleapis.com/");
        assert_eq!(config.api_version, "v1beta");
        assert_eq!(config.model, "gemini-pro");
        assert_eq!(config.timeout, None);
        assert_eq!(config.connect_timeout, None);
        assert_eq!(config.auth_method, AuthMethod::Header);
        assert_eq!(config.api_key.expose_secret(), "test-key");
    }

    #[test]
    fn test_custom_config() {
        let config = SummarizerConfig::builder()
            .api_key(SecretString::new("test-key".into()))
            .api_version("v1")
            .model("gemini-1.5-flash")
            .timeout(Duration::from_secs(60))
            .auth_method(AuthMethod::QueryParam)
            .build()
            .unwrap();

        assert_eq!(config.api_version, "v1");
        assert_eq!(config.model, "gemini-1.5-flash");
        assert_eq!(config.timeout, Some(Duration::from_secs(60)));
        assert_eq!(config.auth_method, AuthMethod::QueryParam);
    }

    #[test]
    fn test_missing_api_key() {
        let result = SummarizerConfig::builder().build();
        assert!(matches!(
            result,
            Err(GeminiError::Configuration(ConfigurationError::MissingApiKey))
        ));
    }

    #[test]
    fn test_invalid_base_url() {
        let result = SummarizerConfig::builder().base_url("not a url");
        assert!(matches!(
            result,
            Err(GeminiError::Configuration(ConfigurationError::InvalidBaseUrl { .. }))
        ));
    }

    #[test]
    fn test_empty_model_rejected() {
        let result = SummarizerConfig::builder()
            .api_key(SecretString::new("test-key".into()))
            .model("  ")
            .build();
        assert!(matches!(
            result,
            Err(GeminiError::Configuration(ConfigurationError::InvalidConfiguration { .. }))
        ));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = SummarizerConfig::builder()
            .api_key(SecretString::new("super-secret".into()))
            .build()
            .unwrap();

        let rendered = format!("{config:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_from_env_falls_back_when_gemini_key_is_blank() {
        let _env = EnvGuard::with(&[("GEMINI_API_KEY", ""), ("GOOGLE_API_KEY", "google-key")]);

        let key = api_key_from_env().unwrap();

        assert_eq!(key.expose_secret(), "google-key");
    }

    #[test]
    fn test_from_env_prefers_gemini_key() {
        let _env = EnvGuard::with(&[
            ("GEMINI_API_KEY", "gemini-key"),
            ("GOOGLE_API_KEY", "google-key"),
        ]);

        let config = SummarizerConfig::from_env().unwrap();

        assert_eq!(config.api_key.expose_secret(), "gemini-key");
    }

    #[test]
    fn test_from_env_without_any_key() {
        let _env = EnvGuard::with(&[("GEMINI_API_KEY", "  "), ("GOOGLE_API_KEY", "")]);

        assert!(matches!(
            SummarizerConfig::from_env(),
            Err(GeminiError::Configuration(ConfigurationError::MissingApiKey))
        ));
    }

    #[test]
    fn test_from_env_defaults() {
        let _env = EnvGuard::with(&[("GEMINI_API_KEY", "k")]);

        let config = SummarizerConfig::from_env().unwrap();

        assert_eq!(config.base_url.as_str(), "https://generativelanguage.googleapis.com/");
        assert_eq!(config.api_version, DEFAULT_API_VERSION);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.timeout, None);
        assert_eq!(config.connect_timeout, None);
    }

    #[test]
    fn test_from_env_overrides() {
        let _env = EnvGuard::with(&[
            ("GOOGLE_API_KEY", "k"),
            ("GEMINI_BASE_URL", "http://localhost:8080/proxy"),
            ("GEMINI_API_VERSION", "v1"),
            ("GEMINI_MODEL", "gemini-1.5-flash"),
            ("GEMINI_TIMEOUT_SECS", "45"),
            ("GEMINI_CONNECT_TIMEOUT_SECS", " 5 "),
        ]);

        let config = SummarizerConfig::from_env().unwrap();

        assert_eq!(config.base_url.as_str(), "http://localhost:8080/proxy");
        assert_eq!(config.api_version, "v1");
        assert_eq!(config.model, "gemini-1.5-flash");
        assert_eq!(config.timeout, Some(Duration::from_secs(45)));
        assert_eq!(config.connect_timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_from_env_rejects_bad_base_url() {
        let _env = EnvGuard::with(&[("GEMINI_API_KEY", "k"), ("GEMINI_BASE_URL", "not a url")]);

        assert_eq!(
            SummarizerConfig::from_env().unwrap_err(),
            GeminiError::Configuration(ConfigurationError::InvalidBaseUrl {
                url: "not a url".to_string()
            })
        );
    }

    #[test]
    fn test_from_env_rejects_non_numeric_timeout() {
        let _env = EnvGuard::with(&[("GEMINI_API_KEY", "k"), ("GEMINI_TIMEOUT_SECS", "abc")]);

        match SummarizerConfig::from_env() {
            Err(GeminiError::Configuration(ConfigurationError::InvalidConfiguration { message })) => {
                assert!(message.contains("GEMINI_TIMEOUT_SECS"));
                assert!(message.contains("abc"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_from_env_rejects_zero_timeout() {
        let _env = EnvGuard::with(&[
            ("GEMINI_API_KEY", "k"),
            ("GEMINI_CONNECT_TIMEOUT_SECS", "0"),
        ]);

        assert!(matches!(
            SummarizerConfig::from_env(),
            Err(GeminiError::Configuration(ConfigurationError::InvalidConfiguration { .. }))
        ));
    }

    #[test]
    fn test_from_env_rejects_blank_model() {
        let _env = EnvGuard::with(&[("GEMINI_API_KEY", "k"), ("GEMINI_MODEL", "")]);

        assert!(matches!(
            SummarizerConfig::from_env(),
            Err(GeminiError::Configuration(ConfigurationError::InvalidConfiguration { .. }))
        ));
    }
}
