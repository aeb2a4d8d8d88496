//! Startup resolution of the node RPC and light-client endpoints.
//!
//! Overrides come from the `rpc` and `light` query parameters of the current
//! location, then from persisted settings, then from built-in defaults.

pub mod config;
pub mod context;
pub mod error;
pub mod init;
pub mod query;
pub mod resolver;

pub use config::*;
pub use context::{ApiUrlComparison, Location, ResolveContext, StaticLocation};
pub use error::*;
pub use init::{init_settings, resolve_endpoints, InitOptions, ResolvedEndpoints};
pub use query::{decode_override, QueryParams};
pub use resolver::{get_api_url, get_light_client_url};
