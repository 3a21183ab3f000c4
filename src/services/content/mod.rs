//! Content generation service for the Gemini API.

mod service;
mod validation;

use async_trait::async_trait;

use crate::error::GeminiError;
use crate::types::{GenerateContentRequest, GenerateContentResponse};

pub use service::ContentServiceImpl;
pub use validation::validate_generate_request;

/// Service for content generation with Gemini models.
#[async_trait]
pub trait ContentService: Send + Sync {
    /// Generate content with `model` in a single request.
    async fn generate(
        &self,
        model: &str,
        request: GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GeminiError>;
}
