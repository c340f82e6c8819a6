//! Scan template descriptors.

use serde::{Deserialize, Serialize};

use super::lenient;

/// A server-defined preset describing a class of scan.
///
/// Its [`uuid`](Self::uuid) is what a [`Scan`](super::Scan) references as
/// `template_uuid`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanTemplate {
    #[serde(deserialize_with = "lenient::null_default")]
    pub uuid: String,
    #[serde(deserialize_with = "lenient::null_default")]
    pub name: String,
    #[serde(deserialize_with = "lenient::null_default")]
    pub title: String,
    #[serde(deserialize_with = "lenient::null_default")]
    pub description: String,
    /// Only usable on the cloud-hosted scanner.
    pub cloud_only: bool,
    /// Requires a subscription the scanner may not have.
    pub subscription_only: bool,
    /// Template for agent-based scans.
    pub is_agent: bool,
    #[serde(rename = "more_info", deserialize_with = "lenient::null_default")]
    pub info: String,
}

impl ScanTemplate {
    /// Returns `true` if a scan can be created from this template on an
    /// on-premise scanner without extra licensing.
    pub fn is_generally_available(&self) -> bool {
        !self.cloud_only && !self.subscription_only
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_template() {
        let template: ScanTemplate = serde_json::from_value(json!({
            "uuid": "731a8e52",
            "name": "basic",
            "title": "Basic Network Scan",
            "description": "A full system scan suitable for any host.",
            "cloud_only": false,
            "subscription_only": false,
            "is_agent": false,
            "more_info": null,
        }))
        .unwrap();

        assert_eq!(template.name, "basic");
        assert_eq!(template.title, "Basic Network Scan");
        assert_eq!(template.info, "");
        assert!(template.is_generally_available());
    }

    #[test]
    fn test_more_info_maps_to_info() {
        let template: ScanTemplate = serde_json::from_value(json!({
            "name": "pci",
            "subscription_only": true,
            "more_info": "https://docs.example.com/pci",
        }))
        .unwrap();

        assert_eq!(template.info, "https://docs.example.com/pci");
        assert!(!template.is_generally_available());

        let encoded = serde_json::to_value(&template).unwrap();
        assert_eq!(encoded["more_info"], "https://docs.example.com/pci");
        assert!(encoded.get("info").is_none());
    }
}
