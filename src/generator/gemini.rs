//! Gemini binding of [`TextGenerator`].

use async_trait::async_trait;
use std::sync::Arc;

use super::TextGenerator;
use crate::error::{GeminiError, ResponseError};
use crate::services::ContentService;
use crate::types::GenerateContentRequest;

/// Generates text with a Gemini model through the content service.
#[derive(Clone)]
pub struct GeminiTextGenerator {
    content: Arc<dyn ContentService>,
    model: String,
}

impl GeminiTextGenerator {
    /// Create a generator that asks `model` through `content`.
    pub fn new(content: Arc<dyn ContentService>, model: impl Into<String>) -> Self {
        Self {
            content,
            model: model.into(),
        }
    }

    /// The model this generator asks.
    pub fn model(&self) -> &str {
        &self.model
    }
}

impl std::fmt::Debug for GeminiTextGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiTextGenerator")
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl TextGenerator for GeminiTextGenerator {
    type Error = GeminiError;

    async fn generate(&self, prompt: &str) -> Result<String, GeminiError> {
        let request = GenerateContentRequest::from_prompt(prompt);
        let response = self.content.generate(&self.model, request).await?;

        response
            .text()
            .ok_or_else(|| ResponseError::EmptyResponse.into())
    }
}
