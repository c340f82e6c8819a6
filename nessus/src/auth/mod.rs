//! Authentication strategies for the scanner API.
//!
//! An [`AuthProvider`] does two things: it prepares a session once, before the
//! client is handed out, and it signs every outgoing request.
//!
//! ## Examples
//!
//! ```rust
//! use nessus_client::AuthProvider;
//!
//! let keys = AuthProvider::key("access", "secret");
//! assert_eq!(keys.name(), "api-keys");
//!
//! let password = AuthProvider::basic("admin", "hunter2");
//! assert_eq!(password.name(), "username/password");
//! ```

mod basic;
mod key;

pub use basic::{BasicAuth, SESSION_HEADER, SessionState};
pub use key::{API_KEYS_HEADER, KeyAuth};

use tracing::instrument;
use url::Url;

use crate::error::AuthError;

/// Authentication strategy used by [`NessusClient`](crate::NessusClient).
#[derive(Debug)]
pub enum AuthProvider {
    /// Access/secret key pair sent on every request.
    Key(KeyAuth),
    /// Username/password exchanged for a session token.
    Basic(BasicAuth),
}

impl AuthProvider {
    /// Key pair authentication.
    pub fn key(access_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self::Key(KeyAuth::new(access_key, secret_key))
    }

    /// Username/password authentication.
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Basic(BasicAuth::new(username, password))
    }

    /// Short name of the strategy, used in spans.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Key(_) => "api-keys",
            Self::Basic(_) => "username/password",
        }
    }

    /// Performs one-time setup before requests can be signed.
    ///
    /// Key pairs need none; password credentials run the session exchange.
    #[instrument(name = "auth_prepare", skip_all, fields(auth.method = self.name()))]
    pub async fn prepare(&self, base_url: &Url, http: &reqwest::Client) -> Result<(), AuthError> {
        match self {
            Self::Key(_) => Ok(()),
            Self::Basic(auth) => auth.prepare(base_url, http).await,
        }
    }

    /// Adds the strategy's credentials to `request`.
    ///
    /// Repeated calls replace rather than duplicate the credential header.
    pub fn add_credentials(&self, request: &mut reqwest::Request) -> Result<(), AuthError> {
        match self {
            Self::Key(auth) => auth.add_credentials(request),
            Self::Basic(auth) => auth.add_credentials(request),
        }
    }
}

impl From<KeyAuth> for AuthProvider {
    fn from(auth: KeyAuth) -> Self {
        Self::Key(auth)
    }
}

impl From<BasicAuth> for AuthProvider {
    fn from(auth: BasicAuth) -> Self {
        Self::Basic(auth)
    }
}
