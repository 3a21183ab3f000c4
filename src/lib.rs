//! # Gemini Markdown Summarizer
//!
//! Summarizes free text into markdown with the Google Gemini (Generative AI)
//! API, and serves the same over HTTP.
//!
//! ## Features
//!
//! - One-call summarization with a fixed markdown prompt
//! - Pluggable text-generation capability through [`TextGenerator`]
//! - Gemini binding with typed errors, safety-block detection and structured logging
//! - Secure credential handling with `SecretString`
//! - `POST /summarize` HTTP service (see [`server`])
//! - Mocks and fixtures for testing without the network
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use integrations_summarizer::{create_summarizer, SummarizerConfig};
//! use secrecy::SecretString;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = SummarizerConfig::builder()
//!         .api_key(SecretString::new("your-api-key".into()))
//!         .build()?;
//!
//!     let summarizer = create_summarizer(config)?;
//!
//!     // Or from environment variables
//!     // let summarizer = integrations_summarizer::create_summarizer_from_env()?;
//!
//!     let summary = summarizer.summarize("Rust is a systems language...").await?;
//!     println!("{summary}");
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - `summarizer` - Prompt construction and the summarize operation
//! - `generator` - The `TextGenerator` capability and its Gemini binding
//! - `client` - Builder and factory functions
//! - `config` - Configuration types and builder
//! - `auth` - API key handling
//! - `transport` - HTTP transport layer
//! - `error` - Error types and taxonomy
//! - `types` - `generateContent` wire types
//! - `services` - The content generation service
//! - `server` - HTTP service

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod generator;
pub mod observability;
pub mod server;
pub mod services;
pub mod summarizer;
pub mod transport;
pub mod types;

// Development/testing modules - always available for integration tests
pub mod fixtures;
pub mod mocks;

pub use auth::{ApiKeyAuthManager, AuthManager};
pub use client::{
    create_summarizer, create_summarizer_from_env, GeminiSummarizer, SummarizerBuilder,
};
pub use config::{
    AuthMethod, LogLevel, SummarizerConfig, SummarizerConfigBuilder, DEFAULT_API_VERSION,
    DEFAULT_BASE_URL, DEFAULT_MODEL,
};
pub use error::{
    // Main error types
    GeminiError,
    GeminiResult,
    // Error categories
    AuthenticationError,
    ConfigurationError,
    ContentError,
    NetworkError,
    RateLimitError,
    RequestError,
    ResourceError,
    ResponseError,
    ServerError,
    ValidationDetail,
    // Error mapping utilities
    map_api_error,
    map_http_status_with_body,
};
pub use generator::{GeminiTextGenerator, TextGenerator};
pub use observability::{Logger, NoopLogger, StructuredLogger};
pub use services::{ContentService, ContentServiceImpl};
pub use summarizer::{build_prompt, Summarizer, NO_TEXT_SENTINEL};
pub use transport::{
    HttpMethod, HttpRequest, HttpResponse, HttpTransport, RequestBuilder, ResponseParser,
    TransportError,
};
pub use types::{
    Candidate, Content, FinishReason, GenerateContentRequest, GenerateContentResponse, Part,
    Role, SafetyRating, UsageMetadata,
};
