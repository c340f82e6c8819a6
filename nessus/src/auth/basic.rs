//! Username/password authentication.
//!
//! The scanner trades a username and password for a session token, which is
//! then sent on each request. The exchange runs once, during
//! [`BasicAuth::prepare`], and the token is read-only afterwards.

use std::fmt;
use std::sync::{PoisonError, RwLock};

use reqwest::header::{HeaderName, HeaderValue};
use tracing::debug;
use url::Url;

use crate::error::AuthError;

/// Header carrying the session token.
pub const SESSION_HEADER: &str = "X-Cookie";

/// Lifecycle of a password-based session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// `prepare` has not been called.
    Uninitialized,
    /// The token exchange is in flight.
    Preparing,
    /// A token is cached and requests can be signed.
    Ready,
    /// The exchange failed; the provider cannot sign requests.
    Failed,
}

enum Session {
    Uninitialized,
    Preparing,
    Ready { token: String },
    Failed,
}

impl Session {
    fn state(&self) -> SessionState {
        match self {
            Self::Uninitialized => SessionState::Uninitialized,
            Self::Preparing => SessionState::Preparing,
            Self::Ready { .. } => SessionState::Ready,
            Self::Failed => SessionState::Failed,
        }
    }
}

/// Username/password credentials backed by a session token.
pub struct BasicAuth {
    username: String,
    password: String,
    session: RwLock<Session>,
}

impl BasicAuth {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            session: RwLock::new(Session::Uninitialized),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the current session state.
    pub fn state(&self) -> SessionState {
        self.session
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .state()
    }

    /// Exchanges the credentials for a session token.
    ///
    /// May only be called once per provider.
    ///
    /// ## Errors
    ///
    /// - [`AuthError::AlreadyPrepared`] on a second call.
    /// - [`AuthError::Exchange`] if the credentials are empty.
    /// - [`AuthError::Unsupported`] while the exchange is not implemented.
    pub async fn prepare(&self, base_url: &Url, http: &reqwest::Client) -> Result<(), AuthError> {
        self.begin()?;
        let outcome = self.exchange(base_url, http).await;
        self.finish(outcome)
    }

    // TODO: POST the credentials to the scanner's session endpoint once the
    // token flow has been confirmed against a live scanner.
    async fn exchange(&self, _base_url: &Url, _http: &reqwest::Client) -> Result<String, AuthError> {
        if self.username.is_empty() || self.password.is_empty() {
            return Err(AuthError::Exchange {
                message: "username and password must not be empty".to_string(),
            });
        }
        Err(AuthError::Unsupported {
            method: "username/password",
        })
    }

    fn begin(&self) -> Result<(), AuthError> {
        let mut session = self.session.write().unwrap_or_else(PoisonError::into_inner);
        match *session {
            Session::Uninitialized => {
                *session = Session::Preparing;
                Ok(())
            }
            _ => Err(AuthError::AlreadyPrepared),
        }
    }

    fn finish(&self, outcome: Result<String, AuthError>) -> Result<(), AuthError> {
        let mut session = self.session.write().unwrap_or_else(PoisonError::into_inner);
        match outcome {
            Ok(token) => {
                debug!(username = %self.username, "session token acquired");
                *session = Session::Ready { token };
                Ok(())
            }
            Err(e) => {
                *session = Session::Failed;
                Err(e)
            }
        }
    }

    /// Sets the session header on `request`.
    ///
    /// ## Errors
    ///
    /// [`AuthError::NotReady`] unless a previous `prepare` succeeded.
    pub fn add_credentials(&self, request: &mut reqwest::Request) -> Result<(), AuthError> {
        let session = self.session.read().unwrap_or_else(PoisonError::into_inner);
        let Session::Ready { token } = &*session else {
            return Err(AuthError::NotReady);
        };

        let mut value = HeaderValue::try_from(format!("token={token}")).map_err(|_| {
            AuthError::InvalidCredential {
                header: SESSION_HEADER,
            }
        })?;
        value.set_sensitive(true);

        request
            .headers_mut()
            .insert(HeaderName::from_static("x-cookie"), value);
        Ok(())
    }
}

impl fmt::Debug for BasicAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicAuth")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("state", &self.state())
            .finish()
    }
}
