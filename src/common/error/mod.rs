//! Unified error types for dsvsheet.
//!
//! This module provides a single error type shared by source decoding,
//! sheet accessors and the delimited writer.

// Submodule declarations
pub mod conversions;
pub mod types;

// Re-exports
pub use types::{Error, Result};
