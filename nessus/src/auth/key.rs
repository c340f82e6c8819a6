//! API key pair authentication.

use std::fmt;

use reqwest::header::{HeaderName, HeaderValue};

use crate::error::AuthError;

/// Header carrying the key pair on every request.
pub const API_KEYS_HEADER: &str = "X-ApiKeys";

/// Access/secret key pair generated from the scanner's user settings.
///
/// Needs no session setup; every request carries
/// `X-ApiKeys: accessKey=<access>; secretKey=<secret>`.
#[derive(Clone, PartialEq, Eq)]
pub struct KeyAuth {
    access_key: String,
    secret_key: String,
}

impl KeyAuth {
    pub fn new(access_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            secret_key: secret_key.into(),
        }
    }

    pub fn access_key(&self) -> &str {
        &self.access_key
    }

    /// Formats the `X-ApiKeys` header value.
    pub fn header_value(&self) -> String {
        format!(
            "accessKey={}; secretKey={}",
            self.access_key, self.secret_key
        )
    }

    /// Sets the key header on `request`, replacing any previous value.
    pub fn add_credentials(&self, request: &mut reqwest::Request) -> Result<(), AuthError> {
        let mut value = HeaderValue::try_from(self.header_value()).map_err(|_| {
            AuthError::InvalidCredential {
                header: API_KEYS_HEADER,
            }
        })?;
        value.set_sensitive(true);

        request
            .headers_mut()
            .insert(HeaderName::from_static("x-apikeys"), value);
        Ok(())
    }
}

impl fmt::Debug for KeyAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyAuth")
            .field("access_key", &self.access_key)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}
