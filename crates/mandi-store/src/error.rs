//! Store error types.

use mandi_commerce::CommerceError;
use thiserror::Error;

/// Errors from the data-access layer.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Record not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Backend failure (network, database).
    #[error("Backend error: {0}")]
    Backend(String),

    /// Subscription failure.
    #[error("Subscription error: {0}")]
    Subscription(String),

    /// Invalid or unsupported configuration.
    #[error("Config error: {0}")]
    Config(String),
}

impl StoreError {
    /// Whether retrying could plausibly succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, StoreError::Backend(_) | StoreError::Subscription(_))
    }
}

impl From<StoreError> for CommerceError {
    fn from(e: StoreError) -> Self {
        CommerceError::Store(e.to_string())
    }
}
