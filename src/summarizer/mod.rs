//! Markdown summarization on top of a [`TextGenerator`].
//!
//! A [`Summarizer`] wraps the caller's text in a fixed instruction prompt,
//! asks the generator once, and returns what it produced unchanged.
//!
//! ```
//! use integrations_summarizer::mocks::MockTextGenerator;
//! use integrations_summarizer::Summarizer;
//!
//! # tokio_test_block(async {
//! let generator = MockTextGenerator::new();
//! generator.enqueue_text("# Overview\n- point");
//!
//! let summarizer = Summarizer::new(generator);
//! let summary = summarizer.summarize("Some long article").await.unwrap();
//! assert_eq!(summary, "# Overview\n- point");
//! # });
//! # fn tokio_test_block<F: std::future::Future>(f: F) -> F::Output {
//! #     tokio::runtime::Runtime::new().unwrap().block_on(f)
//! # }
//! ```

mod prompt;

pub use prompt::{build_prompt, PROMPT_INSTRUCTIONS};

use crate::generator::TextGenerator;

/// Returned in place of a summary when the input has no visible text.
pub const NO_TEXT_SENTINEL: &str = "Error: No text provided for summarization.";

/// Summarizes text into markdown.
#[derive(Debug, Clone)]
pub struct Summarizer<G> {
    generator: G,
}

impl<G: TextGenerator> Summarizer<G> {
    /// Create a summarizer backed by `generator`.
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    /// The generator this summarizer asks.
    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Summarize `text`.
    ///
    /// Empty or whitespace-only input yields [`NO_TEXT_SENTINEL`] without
    /// contacting the generator. Otherwise the generator is called exactly
    /// once and its output is returned as-is.
    ///
    /// # Errors
    ///
    /// Returns the generator's error unchanged.
    pub async fn summarize(&self, text: &str) -> Result<String, G::Error> {
        if text.trim().is_empty() {
            tracing::debug!("No text provided, skipping generation");
            return Ok(NO_TEXT_SENTINEL.to_string());
        }

        let prompt = build_prompt(text);
        tracing::debug!(
            input_len = text.len(),
            prompt_len = prompt.len(),
            "Requesting summary"
        );

        let summary = self.generator.generate(&prompt).await?;

        tracing::debug!(summary_len = summary.len(), "Summary received");
        Ok(summary)
    }
}
