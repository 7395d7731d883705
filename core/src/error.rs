//! Error types for the Grafana API client.
//!
//! # Design
//! A small closed enum. Status failures keep both the numeric code and the
//! raw status line, and render as exactly the status line (`404 Not Found`)
//! so callers matching on message text keep working. Transport failures are
//! passed through untouched.

use thiserror::Error;

use crate::http::BoxError;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors returned by `GrafanaClient` operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not be executed at all.
    #[error(transparent)]
    Transport(BoxError),

    /// The server answered with a status other than 200.
    ///
    /// `message` is built from the code's canonical reason phrase, not the
    /// reason the server sent: a server `404 Org Missing` reads
    /// `404 Not Found`, and a code with no registered phrase reads as the
    /// bare number (`599`). Match on `status` rather than the text.
    #[error("{message}")]
    UnexpectedStatus { status: u16, message: String },

    /// The response body is not JSON of the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The client configuration is unusable.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ApiError {
    /// The HTTP status code, for `UnexpectedStatus` errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}
