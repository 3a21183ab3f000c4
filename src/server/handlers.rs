//! Request handlers and wire types for the HTTP service.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::generator::TextGenerator;
use crate::summarizer::Summarizer;

/// Body of `POST /summarize`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SummarizeRequest {
    /// Text to summarize.
    #[serde(default)]
    pub text: Option<String>,
}

/// Successful response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SummarizeResponse {
    /// Markdown summary.
    pub summary: String,
}

/// Error response body.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ErrorBody {
    /// Client-facing message.
    pub error: String,
}

/// Handler failures.
#[derive(Debug)]
pub enum ApiError {
    /// No usable `text` in the request.
    MissingText,
    /// The summarizer returned an error.
    SummarizationFailed(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingText => (StatusCode::BAD_REQUEST, "Text is required.").into_response(),
            Self::SummarizationFailed(msg) => {
                tracing::error!("Summarization failed: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody {
                        error: "Summarization failed.".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}

/// Handles `POST /summarize`.
///
/// A body that is not JSON, or whose `text` is absent, null or empty, is
/// answered with 400. Whitespace-only text is passed on to the summarizer.
pub async fn summarize<G>(
    State(summarizer): State<Arc<Summarizer<G>>>,
    payload: Result<Json<SummarizeRequest>, JsonRejection>,
) -> Result<Json<SummarizeResponse>, ApiError>
where
    G: TextGenerator + 'static,
{
    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Rejected request body");
        ApiError::MissingText
    })?;

    tracing::debug!(body = ?request, "Received request body");

    let text = request
        .text
        .filter(|t| !t.is_empty())
        .ok_or(ApiError::MissingText)?;

    let summary = summarizer
        .summarize(&text)
        .await
        .map_err(|e| ApiError::SummarizationFailed(e.to_string()))?;

    Ok(Json(SummarizeResponse { summary }))
}
