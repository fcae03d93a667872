//! Error types for the Docker Hub client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Failure taxonomy for the client.
///
/// Every layer propagates failures upward unchanged; nothing here retries,
/// suppresses, or parses structured error bodies.
#[derive(Debug, Error)]
pub enum Error {
    /// Incomplete credentials or an invalid endpoint, detected before any
    /// network call is made.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Transport-level failure (DNS, connection, timeout); no response was
    /// obtained.
    #[error("connection error: {0}")]
    Connection(String),

    /// Non-2xx response. Carries the status code and the raw response body
    /// for caller-side diagnostics.
    #[error("API error: status {status}, body: {body}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Raw response body, verbatim
        body: String,
    },

    /// A response body or pagination link could not be parsed into the
    /// expected shape.
    #[error("decode error: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::Connection("request timed out".to_string())
        } else if err.is_connect() {
            Error::Connection(format!("failed to connect: {err}"))
        } else {
            Error::Connection(err.to_string())
        }
    }
}
