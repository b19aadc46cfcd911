//! Text-based spreadsheet format support (CSV, TSV and other DSV files)
//!
//! A sheet is read from a byte source in two phases. [`PendingTextSheet`]
//! validates the source and starts decoding it on the tokio runtime; awaiting
//! it yields a [`TextSheet`], an immutable grid with range-checked accessors.
//! The [`formats`] module writes grids back out as text, blobs or files.
//!
//! Splitting is deliberately plain: lines end at `\n`, cells end at the
//! delimiter, and quotes are ordinary characters.
//!
//! # Example
//!
//! ```rust,no_run
//! use dsvsheet::common::Blob;
//! use dsvsheet::sheet::text::{TextConfig, TextSheet};
//!
//! # async fn demo() -> dsvsheet::common::Result<()> {
//! let sheet = TextSheet::open(Blob::from("name\tage\nAda\t36"), TextConfig::tsv()).await?;
//!
//! assert_eq!(sheet.number_of_rows(), 2);
//! assert_eq!(sheet.cell(1, 0), Some("Ada"));
//! assert_eq!(sheet.col(1), vec![Some("age"), Some("36")]);
//!
//! let file = sheet.to_file("people.tsv");
//! assert_eq!(file.mime_type(), "text/tsv");
//! # Ok(())
//! # }
//! ```

pub mod formats;
pub mod parser;
pub mod workbook;
pub mod worksheet;

pub use parser::{TextParser, parse_delimited};
pub use workbook::{PendingTextSheet, Source, TextConfig, read_grid};
pub use worksheet::{MAX_PADDED_COLS, TextSheet};
