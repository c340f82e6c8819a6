//! Abstract call surface of the scanner API.
//!
//! Code that only needs to talk to a scanner can depend on [`NessusApi`]
//! instead of [`NessusClient`], and swap in an in-memory fake under test.
//!
//! ## Examples
//!
//! ```rust,no_run
//! use nessus_client::{NessusApi, NessusError};
//!
//! async fn restart<A: NessusApi>(api: &A, id: i64) -> Result<(), NessusError> {
//!     api.stop_scan(id).await?;
//!     api.launch_scan(id).await
//! }
//! ```

use std::future::Future;

use crate::client::NessusClient;
use crate::error::NessusError;
use crate::types::{PersistedScan, Plugin, Scan, ScanDetail, ScanTemplate};

/// The seven scanner operations.
pub trait NessusApi: Send + Sync {
    fn scan_templates(
        &self,
    ) -> impl Future<Output = Result<Vec<ScanTemplate>, NessusError>> + Send;

    fn launch_scan(&self, id: i64) -> impl Future<Output = Result<(), NessusError>> + Send;

    fn stop_scan(&self, id: i64) -> impl Future<Output = Result<(), NessusError>> + Send;

    fn create_scan(
        &self,
        scan: &Scan,
    ) -> impl Future<Output = Result<PersistedScan, NessusError>> + Send;

    /// Lists scans, filtered by modification time when the date is positive.
    fn scans(
        &self,
        last_modification_date: i64,
    ) -> impl Future<Output = Result<Vec<PersistedScan>, NessusError>> + Send;

    fn scan_by_id(&self, id: i64) -> impl Future<Output = Result<ScanDetail, NessusError>> + Send;

    fn plugin_by_id(&self, id: i64) -> impl Future<Output = Result<Plugin, NessusError>> + Send;
}

impl NessusApi for NessusClient {
    async fn scan_templates(&self) -> Result<Vec<ScanTemplate>, NessusError> {
        NessusClient::scan_templates(self).await
    }

    async fn launch_scan(&self, id: i64) -> Result<(), NessusError> {
        NessusClient::launch_scan(self, id).await
    }

    async fn stop_scan(&self, id: i64) -> Result<(), NessusError> {
        NessusClient::stop_scan(self, id).await
    }

    async fn create_scan(&self, scan: &Scan) -> Result<PersistedScan, NessusError> {
        NessusClient::create_scan(self, scan).await
    }

    async fn scans(&self, last_modification_date: i64) -> Result<Vec<PersistedScan>, NessusError> {
        NessusClient::scans(self, last_modification_date).await
    }

    async fn scan_by_id(&self, id: i64) -> Result<ScanDetail, NessusError> {
        NessusClient::scan_by_id(self, id).await
    }

    async fn plugin_by_id(&self, id: i64) -> Result<Plugin, NessusError> {
        NessusClient::plugin_by_id(self, id).await
    }
}
