//! Core error types for the trade-history sync crate.
//!
//! Collaborator-specific errors (from the data source, from the store) are
//! converted to these types at the trait boundary.

use thiserror::Error;

use crate::negotiations::{FetchError, PersistenceError};

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the sync core.
///
/// The orchestrator treats fetch and persistence failures identically today
/// (catch, report, end the run), but the variants stay distinct so recovery
/// policy can diverge without a redesign.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Trade history fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("Persistence operation failed: {0}")]
    Persistence(#[from] PersistenceError),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
