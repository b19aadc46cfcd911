//! Unified error types for dsvsheet.
//!
//! Every fallible operation in the crate, whether it reads a source or slices
//! a parsed sheet, reports one of these variants.
use thiserror::Error;

/// Main error type for dsvsheet operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The value handed to a sheet constructor is not a readable byte source
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A range accessor received an end bound before its start bound
    #[error("Invalid range: {0}")]
    InvalidRange(String),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(String),

    /// Background decoding did not run to completion
    #[error("Decode error: {0}")]
    Decode(String),
}

impl Error {
    /// Build an [`Error::InvalidRange`] for a one-dimensional range.
    pub(crate) fn inverted(axis: &str, start: usize, end: usize) -> Self {
        Error::InvalidRange(format!("{axis}End: {end}, {axis}Start: {start}"))
    }

    /// Returns `true` for [`Error::InvalidRange`].
    pub fn is_invalid_range(&self) -> bool {
        matches!(self, Error::InvalidRange(_))
    }

    /// Returns `true` for [`Error::InvalidInput`].
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Error::InvalidInput(_))
    }
}

/// Result type for dsvsheet operations.
pub type Result<T> = std::result::Result<T, Error>;
