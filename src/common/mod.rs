//! Common types and utilities shared by the reader and the writer.
//!
//! This module holds the unified error type, the in-memory byte containers
//! that sheets are read from and exported to, and UTF-8 decoding helpers.

// Submodule declarations
pub mod blob;
pub mod bom;
pub mod encoding;
pub mod error;

// Re-exports for convenience
pub use blob::{Blob, File};
pub use bom::BomKind;
pub use encoding::decode_text;
pub use error::{Error, Result};
