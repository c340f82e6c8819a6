//! Vulnerability plugin descriptors.

use serde::{Deserialize, Serialize};

use super::lenient;

/// A vulnerability-detection check installed on the scanner.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Plugin {
    pub id: i64,
    #[serde(deserialize_with = "lenient::null_default")]
    pub name: String,
    #[serde(deserialize_with = "lenient::null_default")]
    pub family_name: String,
    #[serde(deserialize_with = "lenient::null_default")]
    pub attributes: Vec<PluginAttribute>,
}

/// One name/value pair describing a plugin (synopsis, CVSS vector, ...).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginAttribute {
    #[serde(rename = "attribute_name", deserialize_with = "lenient::null_default")]
    pub name: String,
    #[serde(rename = "attribute_value", deserialize_with = "lenient::null_default")]
    pub value: String,
}

impl Plugin {
    /// Returns the value of the first attribute called `name`.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Plugin {
        serde_json::from_value(json!({
            "id": 19506,
            "name": "Nessus Scan Information",
            "family_name": "Settings",
            "attributes": [
                { "attribute_name": "risk_factor", "attribute_value": "None" },
                { "attribute_name": "synopsis", "attribute_value": "This plugin displays information about the scan." },
            ],
        }))
        .unwrap()
    }

    #[test]
    fn test_decode_plugin() {
        let plugin = sample();
        assert_eq!(plugin.id, 19506);
        assert_eq!(plugin.family_name, "Settings");
        assert_eq!(plugin.attributes.len(), 2);
        assert_eq!(plugin.attributes[0].name, "risk_factor");
    }

    #[test]
    fn test_attribute_lookup() {
        let plugin = sample();
        assert_eq!(plugin.attribute("risk_factor"), Some("None"));
        assert_eq!(plugin.attribute("cvss_vector"), None);
    }

    #[test]
    fn test_null_attributes() {
        let plugin: Plugin =
            serde_json::from_value(json!({ "id": 1, "attributes": null })).unwrap();
        assert!(plugin.attributes.is_empty());
    }
}
