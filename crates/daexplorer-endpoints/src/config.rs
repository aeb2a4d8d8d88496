//! Endpoint defaults and storage keys.

/// Query parameter overriding the node RPC endpoint.
pub const RPC_PARAM: &str = "rpc";

/// Query parameter overriding the light-client endpoint.
pub const LIGHT_PARAM: &str = "light";

/// Device store key for the light-client URL.
pub const LC_URL_KEY: &str = "lcUrl";

/// RPC endpoint used when nothing else is available.
pub const LOCAL_WS_URL: &str = "ws://127.0.0.1:9944";

/// Light-client endpoint used when nothing is persisted.
pub const DEFAULT_LIGHT_CLIENT_URL: &str = "https://polygon-da-light.matic.today/v1/json-rpc";

/// Schemes accepted for an `rpc` override.
pub const WS_SCHEMES: &[&str] = &["ws://", "wss://"];

/// Schemes accepted for a `light` override.
pub const HTTP_SCHEMES: &[&str] = &["http://", "https://"];

/// Default API URL baked in at build time through the `WS_URL` variable.
pub fn build_ws_url() -> Option<&'static str> {
    option_env!("WS_URL").filter(|url| !url.is_empty())
}
