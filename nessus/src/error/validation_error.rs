//! Response decoding errors.

use thiserror::Error;

/// Errors while interpreting a successful response body.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The body was not valid JSON or did not match the expected shape.
    #[error("Failed to read the response: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl ValidationError {
    /// Returns `true` if this is a parsing error.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::JsonParse(_))
    }

    /// Returns `true` if the body was malformed JSON rather than valid JSON
    /// of the wrong shape.
    pub fn is_syntax_error(&self) -> bool {
        match self {
            Self::JsonParse(e) => e.is_syntax() || e.is_eof(),
        }
    }
}
