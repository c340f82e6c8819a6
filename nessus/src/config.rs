//! Client configuration from explicit values or environment variables.
//!
//! ## Environment
//!
//! | Variable | Meaning |
//! |---|---|
//! | `NESSUS_URL` | Base URL of the scanner API (required) |
//! | `NESSUS_ACCESS_KEY` / `NESSUS_SECRET_KEY` | API key pair |
//! | `NESSUS_USERNAME` / `NESSUS_PASSWORD` | Password credentials, used when no key pair is set |
//! | `NESSUS_INSECURE` | Skip TLS certificate verification (`true`/`false`) |
//! | `NESSUS_TIMEOUT_SECS` | Request timeout in seconds (default 30) |

use std::env;
use std::fmt;
use std::time::Duration;

use crate::auth::AuthProvider;
use crate::error::ConfigError;

pub const NESSUS_URL_ENV: &str = "NESSUS_URL";
pub const NESSUS_ACCESS_KEY_ENV: &str = "NESSUS_ACCESS_KEY";
pub const NESSUS_SECRET_KEY_ENV: &str = "NESSUS_SECRET_KEY";
pub const NESSUS_USERNAME_ENV: &str = "NESSUS_USERNAME";
pub const NESSUS_PASSWORD_ENV: &str = "NESSUS_PASSWORD";
pub const NESSUS_INSECURE_ENV: &str = "NESSUS_INSECURE";
pub const NESSUS_TIMEOUT_ENV: &str = "NESSUS_TIMEOUT_SECS";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Credentials for one of the supported auth strategies.
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    Keys {
        access_key: String,
        secret_key: String,
    },
    Password {
        username: String,
        password: String,
    },
}

impl Credentials {
    /// Builds the matching auth provider.
    pub fn into_auth(self) -> AuthProvider {
        match self {
            Self::Keys {
                access_key,
                secret_key,
            } => AuthProvider::key(access_key, secret_key),
            Self::Password { username, password } => AuthProvider::basic(username, password),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Keys { access_key, .. } => f
                .debug_struct("Keys")
                .field("access_key", access_key)
                .field("secret_key", &"<redacted>")
                .finish(),
            Self::Password { username, .. } => f
                .debug_struct("Password")
                .field("username", username)
                .field("password", &"<redacted>")
                .finish(),
        }
    }
}

/// Everything needed to construct a [`NessusClient`](crate::NessusClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub credentials: Credentials,
    /// Skip TLS certificate verification, for lab scanners with self-signed
    /// certificates.
    pub allow_insecure: bool,
    pub timeout: Duration,
}

impl ClientConfig {
    /// Creates a configuration with strict TLS and the default timeout.
    pub fn new(base_url: impl Into<String>, credentials: Credentials) -> Self {
        Self {
            base_url: base_url.into(),
            credentials,
            allow_insecure: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Reads the configuration from `NESSUS_*` environment variables.
    ///
    /// A key pair takes precedence over password credentials when both are set.
    ///
    /// ## Errors
    ///
    /// - [`ConfigError::MissingEnv`] if the URL or both credential pairs are absent.
    /// - [`ConfigError::InvalidValue`] for unparseable `NESSUS_INSECURE` or
    ///   `NESSUS_TIMEOUT_SECS` values.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = var(NESSUS_URL_ENV).ok_or_else(|| ConfigError::missing_env(&[NESSUS_URL_ENV]))?;

        let credentials = match (var(NESSUS_ACCESS_KEY_ENV), var(NESSUS_SECRET_KEY_ENV)) {
            (Some(access_key), Some(secret_key)) => Credentials::Keys {
                access_key,
                secret_key,
            },
            _ => match (var(NESSUS_USERNAME_ENV), var(NESSUS_PASSWORD_ENV)) {
                (Some(username), Some(password)) => Credentials::Password { username, password },
                _ => {
                    return Err(ConfigError::missing_env(&[
                        NESSUS_ACCESS_KEY_ENV,
                        NESSUS_SECRET_KEY_ENV,
                        NESSUS_USERNAME_ENV,
                        NESSUS_PASSWORD_ENV,
                    ]));
                }
            },
        };

        let allow_insecure = match var(NESSUS_INSECURE_ENV) {
            Some(value) => parse_bool(NESSUS_INSECURE_ENV, &value)?,
            None => false,
        };

        let timeout = match var(NESSUS_TIMEOUT_ENV) {
            Some(value) => parse_timeout(&value)?,
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self {
            base_url,
            credentials,
            allow_insecure,
            timeout,
        })
    }
}

/// Returns a non-empty, trimmed environment variable.
fn var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            var,
            value: value.to_string(),
        }),
    }
}

fn parse_timeout(value: &str) -> Result<Duration, ConfigError> {
    match value.parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidValue {
            var: NESSUS_TIMEOUT_ENV,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const ALL_VARS: [&str; 7] = [
        NESSUS_URL_ENV,
        NESSUS_ACCESS_KEY_ENV,
        NESSUS_SECRET_KEY_ENV,
        NESSUS_USERNAME_ENV,
        NESSUS_PASSWORD_ENV,
        NESSUS_INSECURE_ENV,
        NESSUS_TIMEOUT_ENV,
    ];

    fn set_env(vars: &[(&str, &str)]) {
        // SAFETY: env-mutating tests are serialized with #[serial]
        unsafe {
            for name in ALL_VARS {
                env::remove_var(name);
            }
            for (name, value) in vars {
                env::set_var(name, value);
            }
        }
    }

    #[test]
    #[serial]
    fn test_from_env_missing_url() {
        set_env(&[(NESSUS_ACCESS_KEY_ENV, "ak"), (NESSUS_SECRET_KEY_ENV, "sk")]);

        match ClientConfig::from_env() {
            Err(ConfigError::MissingEnv { env_vars }) => {
                assert_eq!(env_vars, vec![NESSUS_URL_ENV.to_string()]);
            }
            other => panic!("Expected MissingEnv, got {other:?}"),
        }
    }

    #[test]
    #[serial]
    fn test_from_env_key_pair() {
        set_env(&[
            (NESSUS_URL_ENV, "https://scanner.local:8834"),
            (NESSUS_ACCESS_KEY_ENV, "ak"),
            (NESSUS_SECRET_KEY_ENV, "sk"),
            (NESSUS_USERNAME_ENV, "admin"),
            (NESSUS_PASSWORD_ENV, "hunter2"),
        ]);

        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.base_url, "https://scanner.local:8834");
        assert_eq!(
            config.credentials,
            Credentials::Keys {
                access_key: "ak".to_string(),
                secret_key: "sk".to_string(),
            }
        );
        assert!(!config.allow_insecure);
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    #[serial]
    fn test_from_env_password_fallback() {
        set_env(&[
            (NESSUS_URL_ENV, "https://scanner.local:8834"),
            (NESSUS_ACCESS_KEY_ENV, "ak"),
            (NESSUS_USERNAME_ENV, "admin"),
            (NESSUS_PASSWORD_ENV, "hunter2"),
            (NESSUS_INSECURE_ENV, "yes"),
            (NESSUS_TIMEOUT_ENV, "5"),
        ]);

        let config = ClientConfig::from_env().unwrap();
        assert!(matches!(config.credentials, Credentials::Password { .. }));
        assert!(config.allow_insecure);
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    #[serial]
    fn test_from_env_missing_credentials() {
        set_env(&[(NESSUS_URL_ENV, "https://scanner.local:8834")]);

        match ClientConfig::from_env() {
            Err(ConfigError::MissingEnv { env_vars }) => assert_eq!(env_vars.len(), 4),
            other => panic!("Expected MissingEnv, got {other:?}"),
        }
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_values() {
        set_env(&[
            (NESSUS_URL_ENV, "https://scanner.local:8834"),
            (NESSUS_ACCESS_KEY_ENV, "ak"),
            (NESSUS_SECRET_KEY_ENV, "sk"),
            (NESSUS_INSECURE_ENV, "sometimes"),
        ]);
        assert!(matches!(
            ClientConfig::from_env(),
            Err(ConfigError::InvalidValue {
                var: NESSUS_INSECURE_ENV,
                ..
            })
        ));

        set_env(&[
            (NESSUS_URL_ENV, "https://scanner.local:8834"),
            (NESSUS_ACCESS_KEY_ENV, "ak"),
            (NESSUS_SECRET_KEY_ENV, "sk"),
            (NESSUS_TIMEOUT_ENV, "0"),
        ]);
        assert!(matches!(
            ClientConfig::from_env(),
            Err(ConfigError::InvalidValue {
                var: NESSUS_TIMEOUT_ENV,
                ..
            })
        ));
    }

    #[test]
    fn test_credentials_into_auth() {
        let keys = Credentials::Keys {
            access_key: "ak".to_string(),
            secret_key: "sk".to_string(),
        };
        assert!(matches!(keys.into_auth(), AuthProvider::Key(_)));

        let password = Credentials::Password {
            username: "admin".to_string(),
            password: "hunter2".to_string(),
        };
        assert!(matches!(password.into_auth(), AuthProvider::Basic(_)));
    }

    #[test]
    fn test_credentials_debug_redacts() {
        let password = Credentials::Password {
            username: "admin".to_string(),
            password: "hunter2".to_string(),
        };
        assert!(!format!("{password:?}").contains("hunter2"));
    }
}
