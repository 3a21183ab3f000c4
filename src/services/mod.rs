//! Gemini API services used by the summarizer.

pub mod content;

pub use content::{ContentService, ContentServiceImpl};
