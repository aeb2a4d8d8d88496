//! RPC and light-client endpoint resolution.
//!
//! Both resolvers read their inputs from a [`ResolveContext`] and have no
//! side effects. Persisting the results is done by [`crate::init_settings`].

use daexplorer_core::{extract_ipfs_details, SettingsSnapshot};
use tracing::debug;

use crate::config::{
    DEFAULT_LIGHT_CLIENT_URL, HTTP_SCHEMES, LC_URL_KEY, LIGHT_PARAM, LOCAL_WS_URL, RPC_PARAM,
    WS_SCHEMES,
};
use crate::context::{ApiUrlComparison, ResolveContext};
use crate::error::EndpointError;
use crate::query::{decode_override, QueryParams};

/// Validated override for `param`, if one was given.
fn query_override(
    query: &QueryParams,
    param: &str,
    schemes: &[&str],
) -> Result<Option<String>, EndpointError> {
    let Some(raw) = query.single(param)? else {
        return Ok(None);
    };

    let url = decode_override(raw)?;
    if !schemes.iter().any(|scheme| url.starts_with(scheme)) {
        return Err(EndpointError::InvalidInput(format!(
            "'{}' must start with one of {}, got '{}'",
            param,
            schemes.join(" "),
            url
        )));
    }
    Ok(Some(url))
}

/// Resolve the node WebSocket endpoint.
///
/// Order: `rpc` query override, catalog entry matching the IPNS chain,
/// current settings value, first catalog URL, local node.
pub fn get_api_url(ctx: &ResolveContext<'_>) -> Result<String, EndpointError> {
    let href = ctx.location.href();
    let query = QueryParams::from_href(href);

    if let Some(url) = query_override(&query, RPC_PARAM, WS_SCHEMES)? {
        debug!("Using rpc override {}", url);
        return Ok(url);
    }

    if let Some(chain) = extract_ipfs_details(href).ipns_chain {
        if let Some(option) = ctx.catalog.find_by_dnslink(&chain) {
            debug!("Using endpoint {} for dnslink chain {}", option.value, chain);
            return Ok(option.value.clone());
        }
    }

    let stored = SettingsSnapshot::read(ctx.storage)?;
    let kept = match ctx.comparison {
        ApiUrlComparison::LiveStore => {
            let current = ctx.settings.api_url();
            [stored.api_url.as_deref(), ctx.env_default]
                .contains(&Some(current))
                .then(|| current.to_string())
        }
        ApiUrlComparison::PersistedSnapshot => stored
            .api_url
            .filter(|url| !url.is_empty())
            .or_else(|| ctx.env_default.map(str::to_string)),
    };
    if let Some(url) = kept {
        debug!("Keeping settings endpoint {}", url);
        return Ok(url);
    }

    if let Some(option) = ctx.catalog.first_with_value() {
        debug!("Falling back to catalog endpoint {}", option.value);
        return Ok(option.value.clone());
    }

    debug!("No endpoint configured, using local node");
    Ok(LOCAL_WS_URL.to_string())
}

/// Resolve the light-client HTTP endpoint.
///
/// Order: `light` query override, persisted `lcUrl`, built-in default.
pub fn get_light_client_url(ctx: &ResolveContext<'_>) -> Result<String, EndpointError> {
    let query = QueryParams::from_href(ctx.location.href());

    if let Some(url) = query_override(&query, LIGHT_PARAM, HTTP_SCHEMES)? {
        debug!("Using light override {}", url);
        return Ok(url);
    }

    if let Some(stored) = ctx.storage.get(LC_URL_KEY)? {
        debug!("Using stored light client endpoint {}", stored);
        return Ok(stored);
    }

    Ok(DEFAULT_LIGHT_CLIENT_URL.to_string())
}
