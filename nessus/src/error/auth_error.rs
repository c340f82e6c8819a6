//! Authentication setup and credential errors.

use thiserror::Error;

/// Errors raised by an [`AuthProvider`](crate::auth::AuthProvider).
///
/// These occur while preparing a session before the client exists, or while
/// attaching credentials to an outgoing request.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The authentication method has no working session exchange yet.
    #[error("{method} authentication is not supported yet")]
    Unsupported {
        /// Human readable name of the method.
        method: &'static str,
    },

    /// `prepare` was called on a provider that already ran it.
    #[error("Auth provider has already been prepared")]
    AlreadyPrepared,

    /// Credentials were requested before a successful `prepare`.
    #[error("Auth provider is not ready; prepare must succeed first")]
    NotReady,

    /// The credentials cannot be carried in an HTTP header.
    #[error("Invalid credential for header {header}")]
    InvalidCredential {
        /// The header the credential was destined for.
        header: &'static str,
    },

    /// The session exchange with the scanner failed.
    #[error("Session exchange failed: {message}")]
    Exchange {
        /// Description of the failure.
        message: String,
    },
}

impl AuthError {
    /// Returns `true` if this error happened during session setup rather
    /// than while signing a request.
    pub fn is_setup_error(&self) -> bool {
        matches!(
            self,
            Self::Unsupported { .. } | Self::AlreadyPrepared | Self::Exchange { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_display() {
        let err = AuthError::Unsupported {
            method: "username/password",
        };
        assert_eq!(
            err.to_string(),
            "username/password authentication is not supported yet"
        );
        assert!(err.is_setup_error());
    }

    #[test]
    fn test_not_ready_is_not_setup_error() {
        assert!(!AuthError::NotReady.is_setup_error());
    }

    #[test]
    fn test_invalid_credential_names_header() {
        let err = AuthError::InvalidCredential { header: "X-ApiKeys" };
        assert_eq!(err.to_string(), "Invalid credential for header X-ApiKeys");
        assert!(!err.is_setup_error());
    }
}
