//! Example tests demonstrating mock usage and the Arrange-Act-Assert pattern.
//!
//! Each layer can be replaced: the text generator under the summarizer, or
//! the HTTP transport under the Gemini binding.

use integrations_summarizer::fixtures::{load_fixture, load_json_fixture};
use integrations_summarizer::generator::{GeminiTextGenerator, TextGenerator};
use integrations_summarizer::mocks::{MockAuthManager, MockHttpTransport, MockTextGenerator};
use integrations_summarizer::observability::NoopLogger;
use integrations_summarizer::services::ContentServiceImpl;
use integrations_summarizer::types::GenerateContentResponse;
use integrations_summarizer::{GeminiError, ServerError, Summarizer, SummarizerConfig};
use secrecy::SecretString;
use std::sync::Arc;

#[tokio::test]
async fn test_summarizer_over_mock_generator() {
    // Arrange: script the generator
    let generator = MockTextGenerator::new();
    generator.enqueue_text("# Title\n- point");
    let summarizer = Summarizer::new(generator.clone());

    // Act
    let summary = summarizer.summarize("input").await.unwrap();

    // Assert: output and the recorded prompt
    assert_eq!(summary, "# Title\n- point");
    assert!(generator.prompts()[0].ends_with("input"));
}

#[tokio::test]
async fn test_shared_generator_through_arc() {
    // Arrange: one generator shared by two summarizers
    let generator = MockTextGenerator::new();
    generator.enqueue_text("one");
    generator.enqueue_text("two");
    let shared = Arc::new(generator.clone());
    let first = Summarizer::new(Arc::clone(&shared));
    let second = Summarizer::new(shared);

    // Act
    let a = first.summarize("a").await.unwrap();
    let b = second.summarize("b").await.unwrap();

    // Assert
    assert_eq!((a.as_str(), b.as_str()), ("one", "two"));
    assert_eq!(generator.call_count(), 2);
}

#[tokio::test]
async fn test_unscripted_generator_fails_loudly() {
    // Arrange
    let summarizer = Summarizer::new(MockTextGenerator::new());

    // Act
    let result = summarizer.summarize("input").await;

    // Assert
    assert!(matches!(
        result,
        Err(GeminiError::Server(ServerError::InternalError { .. }))
    ));
}

#[tokio::test]
async fn test_gemini_generator_over_mock_transport() {
    // Arrange: wire the Gemini binding by hand
    let transport = Arc::new(MockHttpTransport::new());
    transport.enqueue_json_response(200, &load_fixture("content/success_response.json"));
    let config = SummarizerConfig::builder()
        .api_key(SecretString::new("test-api-key".into()))
        .model("gemini-1.5-flash")
        .build()
        .unwrap();
    let auth = MockAuthManager::new("test-api-key");
    let content = ContentServiceImpl::new(&config, transport.clone(), &auth, Arc::new(NoopLogger));
    let generator = GeminiTextGenerator::new(Arc::new(content), config.model.clone());

    // Act
    let text = generator.generate("prompt").await.unwrap();

    // Assert
    let expected: GenerateContentResponse = load_json_fixture("content/success_response.json");
    assert_eq!(Some(text), expected.text());
    transport.verify_header(0, "x-goog-api-key", "test-api-key");
    assert!(transport
        .last_request()
        .unwrap()
        .url
        .contains("models/gemini-1.5-flash:generateContent"));
}

#[test]
fn test_prompt_blocked_fixture() {
    // Arrange & Act
    let response: GenerateContentResponse = load_json_fixture("content/prompt_blocked.json");

    // Assert
    assert!(response.candidates.is_none());
    assert!(response.prompt_feedback.is_some());
    assert_eq!(response.text(), None);
}
