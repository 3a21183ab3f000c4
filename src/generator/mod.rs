//! The text-generation capability the summarizer depends on.
//!
//! [`TextGenerator`] is the seam between the summarizer and a hosted model:
//! one prompt in, one piece of text out. [`GeminiTextGenerator`] is the
//! production binding; tests use `mocks::MockTextGenerator`.

mod gemini;

use async_trait::async_trait;
use std::sync::Arc;

pub use gemini::GeminiTextGenerator;

/// Produces text for a prompt.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Error returned when generation fails.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Generate text for `prompt` with the provider's default settings.
    async fn generate(&self, prompt: &str) -> Result<String, Self::Error>;
}

#[async_trait]
impl<T: TextGenerator + ?Sized> TextGenerator for Arc<T> {
    type Error = T::Error;

    async fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        (**self).generate(prompt).await
    }
}
