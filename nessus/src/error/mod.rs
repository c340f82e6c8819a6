//! Layered error types for the scanner client.
//!
//! The error hierarchy is structured for actionable diagnostics:
//! - [`NessusError`] - Top-level error type for all client operations
//! - [`AuthError`] - Authentication setup and credential errors
//! - [`RequestError`] - Failures while building an outgoing request
//! - [`ClientError`] - Transport failures and non-success status codes
//! - [`ValidationError`] - Response decoding errors
//! - [`ConfigError`] - Client configuration errors

mod auth_error;
mod client_error;
mod config_error;
mod nessus_error;
mod request_error;
mod validation_error;

pub use auth_error::AuthError;
pub use client_error::ClientError;
pub use config_error::ConfigError;
pub use nessus_error::NessusError;
pub use request_error::RequestError;
pub use validation_error::ValidationError;
