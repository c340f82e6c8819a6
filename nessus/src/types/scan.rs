//! Scan records, scan creation requests and scan results.

use serde::{Deserialize, Serialize};

use super::lenient;

/// A scan as stored on the scanner.
///
/// Returned by scan listing and scan creation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedScan {
    pub id: i64,
    #[serde(deserialize_with = "lenient::null_default")]
    pub uuid: String,
    #[serde(deserialize_with = "lenient::null_default")]
    pub name: String,
    pub enabled: bool,
    #[serde(deserialize_with = "lenient::null_default")]
    pub status: String,
    pub creation_date: i64,
    pub last_modification_date: i64,
    #[serde(deserialize_with = "lenient::null_default")]
    pub owner: String,
}

/// One finding aggregate within a scan result.
///
/// Numeric fields accept both integer and floating encodings and are
/// normalized to `i64`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Vulnerability {
    #[serde(rename = "vuln_index", deserialize_with = "lenient::int")]
    pub index: i64,
    #[serde(deserialize_with = "lenient::int")]
    pub severity: i64,
    #[serde(deserialize_with = "lenient::null_default")]
    pub plugin_name: String,
    #[serde(deserialize_with = "lenient::int")]
    pub count: i64,
    #[serde(deserialize_with = "lenient::int")]
    pub plugin_id: i64,
    #[serde(deserialize_with = "lenient::null_default")]
    pub plugin_family: String,
}

/// Result view of a single scan.
///
/// The scanner does not echo the scan id in this payload; the client stamps
/// the requested id onto the value after decoding.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanDetail {
    #[serde(skip)]
    pub id: i64,
    #[serde(deserialize_with = "lenient::null_default")]
    pub vulnerabilities: Vec<Vulnerability>,
}

/// Mutable scan configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScanSettings {
    pub name: String,
    pub enabled: bool,
    /// Targets to scan, e.g. `"10.0.0.1, 10.0.0.0/24"`.
    #[serde(rename = "text_targets")]
    pub targets: String,
}

/// A scan creation request.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Scan {
    /// UUID of the [`ScanTemplate`](super::ScanTemplate) to create the scan from.
    #[serde(rename = "uuid")]
    pub template_uuid: String,
    pub settings: ScanSettings,
}

impl Scan {
    pub fn new(template_uuid: impl Into<String>, settings: ScanSettings) -> Self {
        Self {
            template_uuid: template_uuid.into(),
            settings,
        }
    }
}

impl ScanSettings {
    /// Settings for an enabled scan against `targets`.
    pub fn new(name: impl Into<String>, targets: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            enabled: true,
            targets: targets.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scan_wire_format() {
        let scan = Scan::new("t-1", ScanSettings::new("n", "10.0.0.1"));

        let encoded = serde_json::to_string(&scan).unwrap();
        assert_eq!(
            encoded,
            r#"{"uuid":"t-1","settings":{"name":"n","enabled":true,"text_targets":"10.0.0.1"}}"#
        );
    }

    #[test]
    fn test_scan_echo_decodes_as_persisted_scan() {
        let scan = Scan::new("t-1", ScanSettings::new("weekly", "10.0.0.0/24"));
        let sent = serde_json::to_value(&scan).unwrap();

        // The scanner echoes the template uuid and the settings it accepted.
        let echo = json!({
            "id": 7,
            "uuid": sent["uuid"],
            "name": sent["settings"]["name"],
            "enabled": sent["settings"]["enabled"],
            "status": "empty",
        });

        let persisted: PersistedScan = serde_json::from_value(echo).unwrap();
        assert_eq!(persisted.id, 7);
        assert_eq!(persisted.uuid, scan.template_uuid);
        assert_eq!(persisted.name, scan.settings.name);
        assert_eq!(persisted.enabled, scan.settings.enabled);
    }

    #[test]
    fn test_persisted_scan_tolerates_nulls_and_missing_fields() {
        let persisted: PersistedScan = serde_json::from_value(json!({
            "id": 3,
            "uuid": null,
            "name": "nightly",
            "owner": null,
        }))
        .unwrap();

        assert_eq!(persisted.id, 3);
        assert_eq!(persisted.uuid, "");
        assert_eq!(persisted.owner, "");
        assert!(!persisted.enabled);
        assert_eq!(persisted.last_modification_date, 0);
    }

    #[test]
    fn test_vulnerability_accepts_float_encodings() {
        let vuln: Vulnerability = serde_json::from_value(json!({
            "vuln_index": 1.0,
            "severity": 4,
            "plugin_name": "OpenSSL Unsupported",
            "count": 2.0,
            "plugin_id": 58987.0,
            "plugin_family": "General",
        }))
        .unwrap();

        assert_eq!(vuln.index, 1);
        assert_eq!(vuln.severity, 4);
        assert_eq!(vuln.count, 2);
        assert_eq!(vuln.plugin_id, 58987);
    }

    #[test]
    fn test_vulnerability_rejects_fractional_numbers() {
        let result = serde_json::from_value::<Vulnerability>(json!({ "severity": 2.5 }));
        assert!(result.is_err());
    }

    #[test]
    fn test_scan_detail_ignores_payload_id() {
        let detail: ScanDetail = serde_json::from_value(json!({
            "id": 99,
            "vulnerabilities": [{ "plugin_id": 10, "count": 1 }],
        }))
        .unwrap();

        assert_eq!(detail.id, 0);
        assert_eq!(detail.vulnerabilities.len(), 1);
        assert_eq!(detail.vulnerabilities[0].plugin_id, 10);
    }

    #[test]
    fn test_scan_detail_null_vulnerabilities() {
        let detail: ScanDetail =
            serde_json::from_value(json!({ "vulnerabilities": null })).unwrap();
        assert!(detail.vulnerabilities.is_empty());
    }

    #[test]
    fn test_scan_detail_never_serializes_id() {
        let detail = ScanDetail {
            id: 5,
            vulnerabilities: vec![],
        };
        let value = serde_json::to_value(&detail).unwrap();
        assert!(value.get("id").is_none());
    }
}
