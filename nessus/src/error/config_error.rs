//! Client configuration errors.

use thiserror::Error;

/// Errors in client configuration.
///
/// These occur before any request is sent, typically from a bad base URL or
/// missing environment variables.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// URL parsing failed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The base URL uses a scheme other than http or https.
    #[error("Unsupported URL scheme: {scheme}")]
    UnsupportedScheme {
        /// The scheme found in the URL.
        scheme: String,
    },

    /// None of the required environment variables are set.
    #[error("Missing configuration: none of the following environment variables are set: {env_vars:?}")]
    MissingEnv {
        /// The environment variable names that were checked.
        env_vars: Vec<String>,
    },

    /// An environment variable holds a value that cannot be interpreted.
    #[error("Invalid value for {var}: {value:?}")]
    InvalidValue {
        /// The environment variable name.
        var: &'static str,
        /// The offending value.
        value: String,
    },
}

impl ConfigError {
    /// Creates a missing environment error from variable names.
    pub fn missing_env(env_vars: &[&str]) -> Self {
        Self::MissingEnv {
            env_vars: env_vars.iter().map(|v| (*v).to_string()).collect(),
        }
    }
}
