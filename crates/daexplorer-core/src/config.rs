//! Platform paths for persisted state.

use directories::ProjectDirs;
use std::path::PathBuf;

/// Configuration error type.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The platform did not yield a usable directory.
    #[error("Could not determine {0} directory")]
    NoDirectory(&'static str),
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("today", "matic", "daexplorer")
}

/// Get the application data directory.
pub fn get_data_dir() -> Result<PathBuf, ConfigError> {
    project_dirs()
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or(ConfigError::NoDirectory("data"))
}

/// Get the path of the device-local key-value store.
pub fn get_store_path() -> Result<PathBuf, ConfigError> {
    get_data_dir().map(|dir| dir.join("store.json"))
}
