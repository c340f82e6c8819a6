//! Transport and HTTP status errors.

use thiserror::Error;

/// Errors from the HTTP transport layer.
///
/// None of these are retried by the client; each is surfaced to the caller
/// as soon as it happens.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    /// Sending the request or reading the response failed (network, DNS, TLS).
    #[error("HTTP request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The scanner answered with a status code of 300 or above.
    ///
    /// The response body is not inspected.
    #[error("Call failed, status code: {status}")]
    HttpStatus {
        /// The HTTP status code returned.
        status: u16,
    },
}

impl ClientError {
    /// Returns the HTTP status code if this is a status error.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status } => Some(*status),
            _ => None,
        }
    }

    /// Returns `true` if the request never produced a response.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}
