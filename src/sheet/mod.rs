//! Immutable in-memory spreadsheets.
//!
//! [`Grid`] is the parsed table shared by every reader. The [`text`] module
//! reads and writes delimiter-separated text.

// Submodule declarations
pub mod text;
pub mod types;

// Re-exports
pub use types::{Column, ColumnSelection, Grid, Row, RowSelection};
