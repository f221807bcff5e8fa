//! Error types for the countdowns ecosystem.

use thiserror::Error;

/// Errors that can occur while loading or configuring the event catalog.
///
/// Query operations on a loaded catalog never fail; everything here happens
/// before the first query.
#[derive(Error, Debug)]
pub enum CountdownError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Event data parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Event '{slug}' has an invalid startsAtUtc timestamp: {value}")]
    InvalidTimestamp { slug: String, value: String },

    #[error("Duplicate event slug: {0}")]
    DuplicateSlug(String),

    #[error("Duplicate event id: {0}")]
    DuplicateId(String),

    #[error("Event slug '{0}' is not URL-safe")]
    InvalidSlug(String),

    #[error("Event catalog is already initialized")]
    AlreadyInitialized,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for countdowns operations.
pub type CountdownResult<T> = Result<T, CountdownError>;
