//! Async client for the Nessus vulnerability scanner REST API.
//!
//! The crate wraps the scanner's management API: listing scan templates,
//! creating, launching and stopping scans, reading scan results and looking
//! up plugins.
//!
//! ## Features
//!
//! - **Typed entities**: Wire records decode leniently into plain structs
//! - **Pluggable auth**: API key pairs, with a password session strategy
//! - **Async-first HTTP client**: Built on `reqwest` with `tokio`
//! - **Layered error handling**: Structured errors for different failure modes
//! - **Tracing**: Every request runs in an OpenTelemetry-style client span
//!
//! ## Example
//!
//! ```rust,no_run
//! use nessus_client::{AuthProvider, NessusClient};
//!
//! # async fn run() -> Result<(), nessus_client::NessusError> {
//! let auth = AuthProvider::key("access", "secret");
//! let client = NessusClient::new(auth, "https://scanner.local:8834", true).await?;
//!
//! for template in client.scan_templates().await? {
//!     println!("{} {}", template.uuid, template.title);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Endpoints are described as typed constants, the response format carried
//! in the type:
//!
//! ```rust
//! use nessus_client::{Endpoint, RestMethod};
//! use nessus_client::response::Discard;
//!
//! const LAUNCH: Endpoint<Discard> = Endpoint::new("launch_scan", RestMethod::Post, "/scans/{id}/launch");
//! assert_eq!(LAUNCH.substitute_params(&[("id", "42")]), "/scans/42/launch");
//! ```

pub mod api;
pub mod auth;
pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod method;
pub mod response;
pub mod types;

// Re-exports for convenience
pub use api::NessusApi;
pub use auth::{AuthProvider, BasicAuth, KeyAuth, SessionState};
pub use client::{NessusClient, NessusClientBuilder};
pub use config::{ClientConfig, Credentials};
pub use endpoint::Endpoint;
pub use error::{
    AuthError, ClientError, ConfigError, NessusError, RequestError, ValidationError,
};
pub use method::RestMethod;
pub use response::ResponseFormat;
pub use types::{
    PersistedScan, Plugin, PluginAttribute, Scan, ScanDetail, ScanSettings, ScanTemplate,
    Vulnerability,
};
