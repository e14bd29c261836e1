//! Common error types for DistroScope

use thiserror::Error;

/// Common result type for DistroScope operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while loading data or resolving configuration.
///
/// The engines themselves never fail: malformed criteria degrade to an
/// absent constraint and an empty result set is an ordinary value.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog data could not be parsed (wraps serde_json::Error)
    #[error("Catalog parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Requested resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid user input or request parameter
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
