//! HTTP front end for the summarizer.
//!
//! Exposes a single route, `POST /summarize`, that accepts
//! `{"text": "..."}` and answers with `{"summary": "..."}`. CORS is
//! permissive so a browser front end on another origin can call it.

mod config;
mod handlers;

use axum::{routing::post, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::generator::TextGenerator;
use crate::summarizer::Summarizer;

pub use config::{ServerConfig, ServerConfigError, DEFAULT_BIND_ADDR};
pub use handlers::{summarize, ApiError, ErrorBody, SummarizeRequest, SummarizeResponse};

/// Builds the service router around `summarizer`.
pub fn router<G>(summarizer: Summarizer<G>) -> Router
where
    G: TextGenerator + 'static,
{
    Router::new()
        .route("/summarize", post(summarize::<G>))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(summarizer))
}
