//! Shared building blocks for the explorer's startup configuration.
//!
//! This crate provides:
//! - Known network endpoints (`endpoints` module)
//! - IPFS/IPNS detection from the current location (`ipfs` module)
//! - Device-local key-value persistence (`store` module)
//! - The persisted settings store (`settings` module)
//! - Platform paths (`config` module)

pub mod config;
pub mod endpoints;
pub mod ipfs;
pub mod settings;
pub mod store;

pub use config::{get_data_dir, get_store_path, ConfigError};
pub use endpoints::{create_ws_endpoints, EndpointCatalog, EndpointOption};
pub use ipfs::{extract_ipfs_details, IpfsDetails};
pub use settings::{Settings, SettingsSnapshot, SettingsUpdate, DEFAULT_API_URL, SETTINGS_KEY};
pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError};
