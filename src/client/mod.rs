//! Construction of a ready-to-use Gemini-backed summarizer.
//!
//! [`SummarizerBuilder`] wires configuration, transport, authentication and
//! logging into a [`GeminiSummarizer`]. The two factory functions cover the
//! common cases.

mod builder;

use crate::config::SummarizerConfig;
use crate::error::GeminiError;
use crate::generator::GeminiTextGenerator;
use crate::summarizer::Summarizer;

pub use builder::SummarizerBuilder;

/// A summarizer that asks Gemini.
pub type GeminiSummarizer = Summarizer<GeminiTextGenerator>;

/// Create a summarizer from an explicit configuration.
pub fn create_summarizer(config: SummarizerConfig) -> Result<GeminiSummarizer, GeminiError> {
    SummarizerBuilder::from_config(config).build()
}

/// Create a summarizer from environment variables.
///
/// See [`SummarizerConfig::from_env`] for the variables read.
pub fn create_summarizer_from_env() -> Result<GeminiSummarizer, GeminiError> {
    let config = SummarizerConfig::from_env()?;
    create_summarizer(config)
}
