//! Error types for the Gemini binding.

mod categories;
mod mapper;
mod types;

pub use categories::*;
pub use mapper::*;
pub use types::*;
