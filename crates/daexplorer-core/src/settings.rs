//! Persisted UI settings.
//!
//! The settings live as one JSON object under [`SETTINGS_KEY`] in the
//! device store. [`Settings`] is the live view: it always has an API URL,
//! falling back to the build default and then to a local node.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::store::{KeyValueStore, StoreError};

/// Store key holding the serialized settings object.
pub const SETTINGS_KEY: &str = "settings";

/// API URL used when nothing is persisted and no build default exists.
pub const DEFAULT_API_URL: &str = "ws://127.0.0.1:9944";

/// Settings as persisted in the device store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsSnapshot {
    /// Node RPC endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    /// UI language.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub i18n_lang: Option<String>,
    /// UI theme name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ui_theme: Option<String>,
    /// Keys written by other components, kept as-is.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl SettingsSnapshot {
    /// Read the persisted snapshot. A missing or unreadable entry is empty.
    pub fn read(store: &dyn KeyValueStore) -> Result<Self, StoreError> {
        let Some(raw) = store.get(SETTINGS_KEY)? else {
            return Ok(Self::default());
        };

        match serde_json::from_str::<Option<Self>>(&raw) {
            Ok(snapshot) => Ok(snapshot.unwrap_or_default()),
            Err(e) => {
                tracing::warn!("Ignoring unreadable settings entry: {}", e);
                Ok(Self::default())
            }
        }
    }
}

/// Partial update applied by [`Settings::set`]. `None` fields are untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsUpdate {
    pub api_url: Option<String>,
    pub i18n_lang: Option<String>,
    pub ui_theme: Option<String>,
}

impl SettingsUpdate {
    pub fn api_url(url: impl Into<String>) -> Self {
        Self {
            api_url: Some(url.into()),
            ..Self::default()
        }
    }
}

type ChangeListener = Box<dyn Fn(&SettingsSnapshot)>;

/// Live settings store.
pub struct Settings {
    values: SettingsSnapshot,
    api_url: String,
    listeners: Vec<ChangeListener>,
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("api_url", &self.api_url)
            .field("values", &self.values)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Settings {
    /// Load settings from `store`.
    ///
    /// The live API URL is the persisted one, else `env_default`, else
    /// [`DEFAULT_API_URL`]. Empty strings count as absent.
    pub fn load(store: &dyn KeyValueStore, env_default: Option<&str>) -> Result<Self, StoreError> {
        let values = SettingsSnapshot::read(store)?;
        let api_url = values
            .api_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .or(env_default.filter(|url| !url.is_empty()))
            .unwrap_or(DEFAULT_API_URL)
            .to_string();

        Ok(Self {
            values,
            api_url,
            listeners: Vec::new(),
        })
    }

    /// Current API URL. Never empty.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Full current values, with the live API URL filled in.
    pub fn get(&self) -> SettingsSnapshot {
        SettingsSnapshot {
            api_url: Some(self.api_url.clone()),
            ..self.values.clone()
        }
    }

    /// Register a listener invoked after every successful [`Settings::set`].
    pub fn on_change(&mut self, listener: impl Fn(&SettingsSnapshot) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Apply `update`, persist the full settings object and notify listeners.
    pub fn set(
        &mut self,
        store: &mut dyn KeyValueStore,
        update: SettingsUpdate,
    ) -> Result<(), StoreError> {
        if let Some(api_url) = update.api_url {
            self.api_url = api_url;
        }
        if update.i18n_lang.is_some() {
            self.values.i18n_lang = update.i18n_lang;
        }
        if update.ui_theme.is_some() {
            self.values.ui_theme = update.ui_theme;
        }

        let current = self.get();
        store.set(SETTINGS_KEY, &serde_json::to_string(&current)?)?;
        self.values = current;

        for listener in &self.listeners {
            listener(&self.values);
        }
        Ok(())
    }
}
