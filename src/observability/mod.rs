//! Observability for the summarizer.
//!
//! Components log through the [`Logger`] trait so that tests can swap in a
//! silent implementation. [`StructuredLogger`] forwards to `tracing`, with
//! credential-looking fields redacted.

pub mod logging;

pub use logging::{Logger, NoopLogger, StructuredLogger};
