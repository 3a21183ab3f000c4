//! Content service implementation backed by an `HttpTransport`.

use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;
use std::time::Instant;

use super::validation::validate_generate_request;
use super::ContentService;
use crate::auth::AuthManager;
use crate::config::SummarizerConfig;
use crate::error::{ContentError, GeminiError, SafetyRatingInfo};
use crate::observability::Logger;
use crate::transport::{endpoints, HttpMethod, HttpTransport, RequestBuilder, ResponseParser};
use crate::types::{
    BlockReason, FinishReason, GenerateContentRequest, GenerateContentResponse, SafetyRating,
};

/// Implementation of the `ContentService`.
pub struct ContentServiceImpl {
    transport: Arc<dyn HttpTransport>,
    request_builder: RequestBuilder,
    logger: Arc<dyn Logger>,
}

impl ContentServiceImpl {
    /// Create a new content service.
    pub fn new(
        config: &SummarizerConfig,
        transport: Arc<dyn HttpTransport>,
        auth_manager: &dyn AuthManager,
        logger: Arc<dyn Logger>,
    ) -> Self {
        let request_builder = RequestBuilder::new(
            config.base_url.clone(),
            config.api_version.clone(),
            auth_manager.clone_box(),
        );

        Self {
            transport,
            request_builder,
            logger,
        }
    }

    /// Turns prompt feedback or candidate finish reasons that signal a block
    /// into a `ContentError`.
    fn check_safety_blocks(response: &GenerateContentResponse) -> Result<(), GeminiError> {
        if let Some(feedback) = &response.prompt_feedback {
            match &feedback.block_reason {
                Some(BlockReason::Safety) => {
                    let ratings = feedback.safety_ratings.as_deref().unwrap_or_default();
                    tracing::warn!(
                        safety_ratings = ?ratings,
                        "Prompt blocked due to safety concerns"
                    );
                    return Err(safety_blocked("prompt", ratings));
                }
                Some(BlockReason::Blocklist | BlockReason::ProhibitedContent) => {
                    tracing::warn!("Prompt blocked due to prohibited content");
                    return Err(ContentError::ProhibitedContent.into());
                }
                Some(BlockReason::Other) => {
                    tracing::warn!("Prompt blocked for an unspecified reason");
                    return Err(safety_blocked("prompt (other)", &[]));
                }
                None => {}
            }
        }

        let Some(candidate) = response.candidates.as_ref().and_then(|c| c.first()) else {
            return Ok(());
        };
        let ratings = candidate.safety_ratings.as_deref().unwrap_or_default();

        match candidate.finish_reason {
            Some(FinishReason::Safety) => {
                tracing::warn!(
                    safety_ratings = ?ratings,
                    "Candidate blocked due to safety concerns"
                );
                Err(safety_blocked("candidate", ratings))
            }
            Some(FinishReason::Recitation) => {
                tracing::warn!("Candidate blocked due to recitation detection");
                Err(ContentError::RecitationBlocked {
                    safety_ratings: rating_infos(ratings),
                }
                .into())
            }
            Some(FinishReason::Blocklist | FinishReason::ProhibitedContent | FinishReason::Spii) => {
                tracing::warn!(
                    finish_reason = ?candidate.finish_reason,
                    "Candidate blocked due to prohibited content"
                );
                Err(ContentError::ProhibitedContent.into())
            }
            _ => Ok(()),
        }
    }
}

fn rating_infos(ratings: &[SafetyRating]) -> Vec<SafetyRatingInfo> {
    ratings
        .iter()
        .map(|r| SafetyRatingInfo {
            category: format!("{:?}", r.category),
            probability: format!("{:?}", r.probability),
        })
        .collect()
}

fn safety_blocked(origin: &str, ratings: &[SafetyRating]) -> GeminiError {
    let reason = ratings
        .iter()
        .find(|r| r.blocked == Some(true))
        .or_else(|| ratings.first())
        .map_or_else(
            || format!("{origin}: unspecified"),
            |r| format!("{origin}: {:?} ({:?})", r.category, r.probability),
        );

    ContentError::SafetyBlocked {
        reason,
        safety_ratings: rating_infos(ratings),
    }
    .into()
}

#[async_trait]
impl ContentService for ContentServiceImpl {
    async fn generate(
        &self,
        model: &str,
        request: GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GeminiError> {
        let start = Instant::now();

        self.logger.debug(
            "Starting content generation",
            json!({
                "model": model,
                "contents_count": request.contents.len(),
            }),
        );

        validate_generate_request(&request)?;

        let path = endpoints::generate_content(model);
        let http_request =
            self.request_builder
                .build_request(HttpMethod::Post, &path, Some(&request))?;

        let http_response = self.transport.send(http_request).await.map_err(|e| {
            let error = GeminiError::from(e);
            self.logger.error(
                "Network error during content generation",
                json!({
                    "error": error.to_string(),
                    "model": model,
                }),
            );
            error
        })?;

        let status = http_response.status;
        let response: GenerateContentResponse =
            ResponseParser::parse_response(http_response).map_err(|e| {
                self.logger.error(
                    "Content generation failed",
                    json!({
                        "error": e.to_string(),
                        "model": model,
                        "status": status,
                    }),
                );
                e
            })?;

        if let Err(e) = Self::check_safety_blocks(&response) {
            self.logger.warn(
                "Content generation blocked",
                json!({
                    "error": e.to_string(),
                    "model": model,
                    "duration_ms": start.elapsed().as_millis(),
                }),
            );
            return Err(e);
        }

        let usage = response.usage_metadata.as_ref();
        self.logger.info(
            "Content generation completed",
            json!({
                "model": model,
                "status": status,
                "duration_ms": start.elapsed().as_millis(),
                "prompt_tokens": usage.map(|u| u.prompt_token_count),
                "completion_tokens": usage.and_then(|u| u.candidates_token_count),
                "total_tokens": usage.map(|u| u.total_token_count),
                "candidates": response.candidates.as_ref().map_or(0, Vec::len),
            }),
        );

        Ok(response)
    }
}
