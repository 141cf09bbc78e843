//! Commerce error types.
//!
//! Deliberately small: most failure paths in this crate degrade to empty
//! results with a log line rather than surfacing an error.

use thiserror::Error;

/// Errors that can occur in grocery/mandi operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Drill-down navigation attempted out of order.
    #[error("Invalid navigation from {from} to {to}")]
    InvalidNavigation { from: String, to: String },

    /// Store/backend error.
    #[error("Store error: {0}")]
    Store(String),
}
