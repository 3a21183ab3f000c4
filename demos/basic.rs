//! Basic summarization example.
//!
//! This example demonstrates:
//! - Creating a summarizer from environment variables
//! - Summarizing text read from stdin
//! - Handling the provider's errors
//!
//! # Usage
//!
//! Set your API key as an environment variable:
//! ```bash
//! export GEMINI_API_KEY="your-api-key-here"
//! # or
//! export GOOGLE_API_KEY="your-api-key-here"
//! ```
//!
//! Then run:
//! ```bash
//! cat article.txt | cargo run --example basic
//! ```

#![allow(clippy::print_stdout, clippy::print_stderr)]

use integrations_summarizer::{create_summarizer_from_env, GeminiError};
use tokio::io::AsyncReadExt;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();

    // Reads GEMINI_API_KEY or GOOGLE_API_KEY, plus the optional GEMINI_* overrides
    let summarizer = create_summarizer_from_env()?;
    eprintln!("Using model {}", summarizer.generator().model());

    let mut text = String::new();
    tokio::io::stdin().read_to_string(&mut text).await?;

    match summarizer.summarize(&text).await {
        Ok(summary) => println!("{summary}"),
        Err(GeminiError::RateLimit(e)) => {
            eprintln!("Rate limited: {e}");
            if let Some(wait) = e.retry_after() {
                eprintln!("Provider asked to wait {}s", wait.as_secs());
            }
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
