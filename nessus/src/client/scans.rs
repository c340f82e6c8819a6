//! Scanner API operations.
//!
//! One async method per remote operation. Each builds its request, runs it
//! through the shared executor and unwraps the response envelope.

use serde::Deserialize;
use tracing::debug;

use super::executor::NessusClient;
use crate::endpoint::Endpoint;
use crate::error::NessusError;
use crate::method::RestMethod;
use crate::response::{Discard, JsonFormat};
use crate::types::{PersistedScan, Plugin, Scan, ScanDetail, ScanTemplate, lenient};

#[derive(Deserialize)]
struct TemplatesEnvelope {
    #[serde(default, deserialize_with = "lenient::null_default")]
    templates: Vec<ScanTemplate>,
}

#[derive(Deserialize)]
struct ScansEnvelope {
    #[serde(default, deserialize_with = "lenient::null_default")]
    scans: Vec<PersistedScan>,
}

#[derive(Deserialize)]
struct ScanEnvelope {
    #[serde(default, deserialize_with = "lenient::null_default")]
    scan: PersistedScan,
}

const SCAN_TEMPLATES: Endpoint<JsonFormat<TemplatesEnvelope>> = Endpoint::new(
    "scan_templates",
    RestMethod::Get,
    "/editor/scan/templates",
);
const LAUNCH_SCAN: Endpoint<Discard> =
    Endpoint::new("launch_scan", RestMethod::Post, "/scans/{id}/launch");
const STOP_SCAN: Endpoint<Discard> =
    Endpoint::new("stop_scan", RestMethod::Post, "/scans/{id}/stop");
const CREATE_SCAN: Endpoint<JsonFormat<ScanEnvelope>> =
    Endpoint::new("create_scan", RestMethod::Post, "/scans");
const LIST_SCANS: Endpoint<JsonFormat<ScansEnvelope>> =
    Endpoint::new("scans", RestMethod::Get, "/scans");
const SCAN_BY_ID: Endpoint<JsonFormat<ScanDetail>> =
    Endpoint::new("scan_by_id", RestMethod::Get, "/scans/{id}");
const PLUGIN_BY_ID: Endpoint<JsonFormat<Plugin>> =
    Endpoint::new("plugin_by_id", RestMethod::Get, "/plugins/plugin/{id}");

/// Query parameter filtering scans by modification time.
const LAST_MODIFICATION_DATE: &str = "last_modification_date";

impl NessusClient {
    /// Lists the scan templates available to the authenticated user.
    pub async fn scan_templates(&self) -> Result<Vec<ScanTemplate>, NessusError> {
        let request = self.request(&SCAN_TEMPLATES, &[], &[], None::<&()>)?;
        let envelope = self.execute(&SCAN_TEMPLATES, request).await?;
        Ok(envelope.templates)
    }

    /// Starts the scan with `id`. The response body is ignored.
    pub async fn launch_scan(&self, id: i64) -> Result<(), NessusError> {
        let id = id.to_string();
        let request = self.request(&LAUNCH_SCAN, &[("id", &id)], &[], None::<&()>)?;
        self.execute(&LAUNCH_SCAN, request).await
    }

    /// Stops the running scan with `id`. The response body is ignored.
    pub async fn stop_scan(&self, id: i64) -> Result<(), NessusError> {
        let id = id.to_string();
        let request = self.request(&STOP_SCAN, &[("id", &id)], &[], None::<&()>)?;
        self.execute(&STOP_SCAN, request).await
    }

    /// Creates a scan from a template and returns the stored record.
    ///
    /// ## Examples
    ///
    /// ```rust,no_run
    /// use nessus_client::{AuthProvider, NessusClient, Scan, ScanSettings};
    ///
    /// # async fn run() -> Result<(), nessus_client::NessusError> {
    /// let client = NessusClient::new(AuthProvider::key("ak", "sk"), "https://scanner.local:8834", false).await?;
    ///
    /// let scan = Scan::new("template-uuid", ScanSettings::new("weekly", "10.0.0.0/24"));
    /// let created = client.create_scan(&scan).await?;
    /// println!("created scan {}", created.id);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create_scan(&self, scan: &Scan) -> Result<PersistedScan, NessusError> {
        let request = self.request(&CREATE_SCAN, &[], &[], Some(scan))?;
        let envelope = self.execute(&CREATE_SCAN, request).await?;
        debug!(scan.id = envelope.scan.id, "scan created");
        Ok(envelope.scan)
    }

    /// Lists scans.
    ///
    /// When `last_modification_date` is positive only scans modified after
    /// that Unix timestamp are returned; otherwise no filter is sent.
    pub async fn scans(&self, last_modification_date: i64) -> Result<Vec<PersistedScan>, NessusError> {
        let query = if last_modification_date > 0 {
            vec![(LAST_MODIFICATION_DATE, last_modification_date.to_string())]
        } else {
            Vec::new()
        };

        let request = self.request(&LIST_SCANS, &[], &query, None::<&()>)?;
        let envelope = self.execute(&LIST_SCANS, request).await?;
        Ok(envelope.scans)
    }

    /// Fetches the results of the scan with `id`.
    ///
    /// The payload does not carry the id, so it is copied from the argument.
    pub async fn scan_by_id(&self, id: i64) -> Result<ScanDetail, NessusError> {
        let id_param = id.to_string();
        let request = self.request(&SCAN_BY_ID, &[("id", &id_param)], &[], None::<&()>)?;
        let mut detail = self.execute(&SCAN_BY_ID, request).await?;
        detail.id = id;
        Ok(detail)
    }

    /// Fetches the plugin with `id`.
    pub async fn plugin_by_id(&self, id: i64) -> Result<Plugin, NessusError> {
        let id = id.to_string();
        let request = self.request(&PLUGIN_BY_ID, &[("id", &id)], &[], None::<&()>)?;
        self.execute(&PLUGIN_BY_ID, request).await
    }
}
