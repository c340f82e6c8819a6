//! Request construction errors.

use thiserror::Error;

/// Errors raised while building an outgoing request, before anything is sent.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The request body could not be serialized to JSON.
    #[error("Unable to serialize request body: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The endpoint path did not form a valid URL under the base URL.
    #[error("Invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The HTTP request object could not be assembled.
    #[error("Unable to create request object: {0}")]
    Build(#[source] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_display() {
        let json_err = serde_json::from_str::<serde_json::Value>("[").unwrap_err();
        let err = RequestError::Serialize(json_err);
        assert!(err.to_string().starts_with("Unable to serialize request body"));
    }

    #[test]
    fn test_invalid_url_from() {
        let err: RequestError = url::Url::parse("http://[::1").unwrap_err().into();
        assert!(matches!(err, RequestError::InvalidUrl(_)));
    }
}
