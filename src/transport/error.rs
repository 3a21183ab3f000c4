//! Transport layer error types.

/// Transport error.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The connection could not be made or was dropped.
    #[error("Connection error: {0}")]
    Connection(String),
    /// A configured timeout elapsed.
    #[error("Timeout")]
    Timeout,
    /// The request was sent but the exchange failed.
    #[error("Request error: {0}")]
    Request(String),
}
