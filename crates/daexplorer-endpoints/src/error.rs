//! Error types for endpoint resolution.

use daexplorer_core::StoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EndpointError {
    /// A query override was repeated, malformed or used the wrong scheme.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl EndpointError {
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, EndpointError::InvalidInput(_))
    }
}
