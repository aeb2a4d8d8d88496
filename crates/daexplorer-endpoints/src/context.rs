//! Inputs to endpoint resolution.

use daexplorer_core::{EndpointCatalog, KeyValueStore, Settings};

/// Source of the current location href.
pub trait Location {
    fn href(&self) -> &str;
}

/// A fixed href, as passed on the command line or in tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticLocation(String);

impl StaticLocation {
    pub fn new(href: impl Into<String>) -> Self {
        Self(href.into())
    }
}

impl From<&str> for StaticLocation {
    fn from(href: &str) -> Self {
        Self::new(href)
    }
}

impl Location for StaticLocation {
    fn href(&self) -> &str {
        &self.0
    }
}

impl Location for url::Url {
    fn href(&self) -> &str {
        self.as_str()
    }
}

/// Which value decides whether the current API URL is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApiUrlComparison {
    /// Keep the live settings value if it equals the persisted `apiUrl` or
    /// the build default.
    #[default]
    LiveStore,
    /// Keep the persisted `apiUrl` if set, else the build default if set.
    PersistedSnapshot,
}

impl ApiUrlComparison {
    pub fn label(&self) -> &'static str {
        match self {
            ApiUrlComparison::LiveStore => "live",
            ApiUrlComparison::PersistedSnapshot => "snapshot",
        }
    }
}

impl std::str::FromStr for ApiUrlComparison {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "live" | "store" => Ok(ApiUrlComparison::LiveStore),
            "snapshot" | "persisted" => Ok(ApiUrlComparison::PersistedSnapshot),
            _ => Err(format!(
                "Unknown comparison '{}'. Valid options: live, snapshot",
                s
            )),
        }
    }
}

/// Everything the resolvers read.
pub struct ResolveContext<'a> {
    pub location: &'a dyn Location,
    pub catalog: &'a EndpointCatalog,
    /// Live settings store.
    pub settings: &'a Settings,
    /// Device store holding the settings snapshot and `lcUrl`.
    pub storage: &'a dyn KeyValueStore,
    /// Build-time default API URL.
    pub env_default: Option<&'a str>,
    pub comparison: ApiUrlComparison,
}
