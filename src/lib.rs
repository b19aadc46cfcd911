//! dsvsheet - immutable in-memory reader for delimiter-separated text
//!
//! The crate parses CSV, TSV and other single-character-delimited text into
//! an immutable grid of strings and serializes grids back into text or
//! exportable blobs.
//!
//! # Features
//!
//! - **Two-phase loading**: sources decode in the background and the parsed
//!   sheet only becomes available once decoding has finished
//! - **Range accessors**: cells, rows, columns and rectangles with inclusive
//!   bounds and tolerant clipping
//! - **Shared reads**: parsed sheets are `Clone + Send + Sync` and never
//!   change after parsing
//! - **Exports**: blobs and named files tagged with a MIME type inferred from
//!   the delimiter
//!
//! # Example
//!
//! ```
//! use dsvsheet::sheet::text::TextSheet;
//! use dsvsheet::sheet::text::formats::to_text;
//!
//! let sheet = TextSheet::from_text("a,b,c\n1,2", ',');
//! assert_eq!(sheet.number_of_cols(), 3);
//! assert_eq!(sheet.cell(1, 2), None);
//!
//! let rect = sheet.range(0, 0, 1, 1).unwrap();
//! assert_eq!(to_text(&rect, ','), "a,b\n1,2");
//! ```

/// Errors, byte containers and UTF-8 decoding shared across the crate.
pub mod common;

/// Parsed grids and the delimited text reader and writer.
pub mod sheet;

// Re-export commonly used types for convenience
pub use common::{Blob, Error, File, Result};
pub use sheet::text::{PendingTextSheet, Source, TextConfig, TextSheet};
pub use sheet::{ColumnSelection, Grid, RowSelection};
