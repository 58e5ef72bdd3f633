//! Error types for adminkit
//!
//! This module defines the error type shared by the core and web crates.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! Most of the core is infallible: capability absence is a normal branch and
//! tag specs are never rejected. Errors only surface from URL patching, time
//! parsing, configuration loading, and host-provided value reductions.

use thiserror::Error;

/// Result type alias for adminkit operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for adminkit
#[derive(Debug, Error)]
pub enum Error {
    /// URL could not be parsed
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Time string did not match any accepted layout
    #[error("Invalid time: {0}")]
    InvalidTime(String),

    /// A field value failed to reduce itself to a primitive value
    #[error("Value reduction failed: {0}")]
    Reduction(String),

    /// Configuration could not be read, parsed or validated
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Build a reduction error from any displayable cause
    pub fn reduction(cause: impl std::fmt::Display) -> Self {
        Error::Reduction(cause.to_string())
    }
}
