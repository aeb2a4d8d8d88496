//! Startup sequence: resolve both endpoints, persist them and report them.

use daexplorer_core::{EndpointCatalog, KeyValueStore, Settings, SettingsUpdate};
use serde::Serialize;
use tracing::info;

use crate::config::{build_ws_url, LC_URL_KEY};
use crate::context::{ApiUrlComparison, Location, ResolveContext};
use crate::error::EndpointError;
use crate::resolver::{get_api_url, get_light_client_url};

/// The endpoints the application connects to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedEndpoints {
    /// Node WebSocket RPC URL.
    pub api_url: String,
    /// Light-client HTTP URL.
    pub lc_url: String,
}

/// Options for [`init_settings`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitOptions {
    /// Build-time default API URL.
    pub env_default: Option<String>,
    pub comparison: ApiUrlComparison,
}

impl Default for InitOptions {
    fn default() -> Self {
        Self {
            env_default: build_ws_url().map(str::to_string),
            comparison: ApiUrlComparison::default(),
        }
    }
}

/// Resolve both endpoints without side effects.
pub fn resolve_endpoints(ctx: &ResolveContext<'_>) -> Result<ResolvedEndpoints, EndpointError> {
    let api_url = get_api_url(ctx)?;
    let lc_url = get_light_client_url(ctx)?;
    Ok(ResolvedEndpoints { api_url, lc_url })
}

/// Resolve the endpoints, store them as the active settings and log them.
///
/// An invalid override aborts before anything is written.
pub fn init_settings(
    location: &dyn Location,
    catalog: &EndpointCatalog,
    settings: &mut Settings,
    storage: &mut dyn KeyValueStore,
    options: &InitOptions,
) -> Result<ResolvedEndpoints, EndpointError> {
    let resolved = {
        let ctx = ResolveContext {
            location,
            catalog,
            settings: &*settings,
            storage: &*storage,
            env_default: options.env_default.as_deref(),
            comparison: options.comparison,
        };
        resolve_endpoints(&ctx)?
    };

    settings.set(storage, SettingsUpdate::api_url(resolved.api_url.as_str()))?;
    storage.set(LC_URL_KEY, &resolved.lc_url)?;

    info!("WS endpoint= {}", resolved.api_url);
    info!("LC endpoint= {}", resolved.lc_url);

    Ok(resolved)
}
