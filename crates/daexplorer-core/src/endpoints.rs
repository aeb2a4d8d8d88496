//! Known network endpoints.
//!
//! The catalog is ordered. Header rows carry an empty `value` and only
//! group the entries that follow them.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::store::StoreError;

/// One selectable endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointOption {
    /// Short identifier of the network.
    #[serde(default)]
    pub info: Option<String>,
    /// Display label.
    pub text: String,
    /// Connection URL. Empty for header rows.
    #[serde(default)]
    pub value: String,
    /// DNS-link chain identifier this endpoint serves.
    #[serde(default)]
    pub dnslink: Option<String>,
    #[serde(default)]
    pub is_header: bool,
    #[serde(default)]
    pub is_disabled: bool,
}

impl EndpointOption {
    pub fn new(info: &str, text: &str, value: &str) -> Self {
        Self {
            info: Some(info.to_string()),
            text: text.to_string(),
            value: value.to_string(),
            dnslink: None,
            is_header: false,
            is_disabled: false,
        }
    }

    /// A grouping row without a URL.
    pub fn header(text: &str) -> Self {
        Self {
            info: None,
            text: text.to_string(),
            value: String::new(),
            dnslink: None,
            is_header: true,
            is_disabled: false,
        }
    }

    pub fn with_dnslink(mut self, dnslink: &str) -> Self {
        self.dnslink = Some(dnslink.to_string());
        self
    }
}

/// Ordered list of endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EndpointCatalog {
    options: Vec<EndpointOption>,
}

impl EndpointCatalog {
    pub fn new(options: Vec<EndpointOption>) -> Self {
        Self { options }
    }

    /// The endpoints shipped with the application.
    pub fn builtin() -> Self {
        Self::new(vec![
            EndpointOption::header("Live networks"),
            EndpointOption::new(
                "polygon-da",
                "Polygon Avail",
                "wss://polygon-da-explorer.matic.today/ws",
            )
            .with_dnslink("polygon-da"),
            EndpointOption::header("Test networks"),
            EndpointOption::new(
                "avail-testnet",
                "Avail Testnet",
                "wss://testnet.polygonavail.net/ws",
            )
            .with_dnslink("avail"),
            EndpointOption::header("Development"),
            EndpointOption::new("local", "Local Node", "ws://127.0.0.1:9944"),
        ])
    }

    /// Parse a catalog from a JSON array of options.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load a catalog from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self, StoreError> {
        let content = fs::read_to_string(path)?;
        Ok(Self::from_json_str(&content)?)
    }

    pub fn iter(&self) -> impl Iterator<Item = &EndpointOption> {
        self.options.iter()
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// First endpoint registered for the DNS-link `chain`.
    pub fn find_by_dnslink(&self, chain: &str) -> Option<&EndpointOption> {
        self.options
            .iter()
            .find(|option| option.dnslink.as_deref() == Some(chain))
    }

    /// First endpoint with a non-empty URL.
    pub fn first_with_value(&self) -> Option<&EndpointOption> {
        self.options.iter().find(|option| !option.value.is_empty())
    }
}

/// Build the WebSocket endpoint catalog.
pub fn create_ws_endpoints() -> EndpointCatalog {
    EndpointCatalog::builtin()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_starts_with_header() {
        let catalog = create_ws_endpoints();
        let first = catalog.iter().next().unwrap();
        assert!(first.is_header);
        assert!(first.value.is_empty());
    }

    #[test]
    fn test_builtin_urls_are_websocket() {
        for option in EndpointCatalog::builtin().iter().filter(|o| !o.is_header) {
            assert!(
                option.value.starts_with("ws://") || option.value.starts_with("wss://"),
                "{} has a non-websocket url",
                option.text
            );
        }
    }

    #[test]
    fn test_first_with_value_skips_headers() {
        let catalog = EndpointCatalog::builtin();
        let first = catalog.first_with_value().unwrap();
        assert_eq!(first.value, "wss://polygon-da-explorer.matic.today/ws");
    }

    #[test]
    fn test_first_with_value_empty_catalog() {
        assert!(EndpointCatalog::default().first_with_value().is_none());
    }

    #[test]
    fn test_find_by_dnslink_catalog_order() {
        let catalog = EndpointCatalog::new(vec![
            EndpointOption::new("a", "A", "wss://a.example").with_dnslink("chain"),
            EndpointOption::new("b", "B", "wss://b.example").with_dnslink("chain"),
        ]);
        assert_eq!(
            catalog.find_by_dnslink("chain").unwrap().value,
            "wss://a.example"
        );
        assert!(catalog.find_by_dnslink("other").is_none());
    }

    #[test]
    fn test_from_json_str_defaults() {
        let catalog = EndpointCatalog::from_json_str(
            r#"[{"text":"Header","isHeader":true},{"text":"Node","value":"wss://n.example","dnslink":"n"}]"#,
        )
        .unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.iter().next().unwrap().is_header);
        assert_eq!(catalog.find_by_dnslink("n").unwrap().value, "wss://n.example");
    }

    #[test]
    fn test_from_json_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let result = EndpointCatalog::from_json_file(&dir.path().join("endpoints.json"));
        assert!(matches!(result, Err(StoreError::Io(_))));
    }
}
