//! HTTP client for the scanner API.
//!
//! [`NessusClient`] owns the connection pool and auth provider; the executor
//! and the per-operation methods live in submodules.

mod executor;
mod scans;

pub use executor::{NessusClient, NessusClientBuilder};
