//! Top-level client error type.

use super::{AuthError, ClientError, ConfigError, RequestError, ValidationError};
use thiserror::Error;

/// Top-level error type for all scanner client operations.
///
/// This enum aggregates all error categories, enabling unified error handling
/// while preserving the ability to match on specific error types when needed.
///
/// ## Examples
///
/// ```rust,ignore
/// use nessus_client::{ClientError, NessusError};
///
/// fn handle_error(err: NessusError) {
///     match err {
///         NessusError::Init(e) => eprintln!("Client setup failed: {e}"),
///         NessusError::Client(ClientError::HttpStatus { status }) => {
///             eprintln!("Scanner answered {status}")
///         }
///         other => eprintln!("{other}"),
///     }
/// }
/// ```
#[derive(Debug, Error)]
pub enum NessusError {
    /// The auth provider could not be prepared, so no client was built.
    #[error("Failed to prepare auth provider: {0}")]
    Init(#[source] AuthError),

    /// Credentials could not be attached to a request.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// The outgoing request could not be built.
    #[error(transparent)]
    Request(#[from] RequestError),

    /// Transport failures and non-success status codes.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// The response body did not match the expected shape.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Invalid client configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl NessusError {
    /// Returns the HTTP status code if the scanner answered with an error status.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Client(e) => e.status_code(),
            _ => None,
        }
    }

    /// Returns `true` if this error was raised while constructing the client.
    pub fn is_init(&self) -> bool {
        matches!(self, Self::Init(_))
    }
}
