//! Wire entities of the scanner API.
//!
//! Field names follow the scanner's JSON keys exactly; where the Rust name
//! differs the key is given with `#[serde(rename)]`. Decoding is lenient:
//! missing fields take their default value.

pub(crate) mod lenient;
mod plugin;
mod scan;
mod template;

pub use plugin::{Plugin, PluginAttribute};
pub use scan::{PersistedScan, Scan, ScanDetail, ScanSettings, Vulnerability};
pub use template::ScanTemplate;
