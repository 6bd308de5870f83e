//! Application errors.
use thiserror::Error;

/// Classified outcome of a request against the Cantor API.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The credential was missing, expired, or rejected by the server.
    ///
    /// Never shown inline: callers redirect to the login page instead.
    #[error("authentication required")]
    AuthFailure,

    /// The request completed with a non-success status.
    #[error("{message}")]
    Application {
        status: u16,

        /// Human readable message extracted from the response body.
        message: String,
    },

    /// The request could not be completed.
    #[error("network error: {0}")]
    Network(String),
}

pub type Result<T> = std::result::Result<T, ApiError>;
