//! Common types for spreadsheet operations.

use std::ops::Range;
use std::sync::Arc;

/// A single parsed row. Rows are never resized or edited after parsing.
pub type Row = Box<[String]>;

/// Immutable, possibly ragged, table of cell strings.
///
/// Cloning a grid only bumps a reference count, so parsed sheets can be handed
/// to other tasks and read concurrently without synchronization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Arc<[Row]>,
    number_of_cols: usize,
}

impl Grid {
    /// Freeze a list of rows into a grid.
    pub fn from_rows(rows: Vec<Row>) -> Self {
        let number_of_cols = rows.iter().map(|row| row.len()).max().unwrap_or(0);
        Grid {
            rows: rows.into(),
            number_of_cols,
        }
    }

    #[inline]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of rows.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Length of the longest row.
    #[inline]
    pub fn number_of_cols(&self) -> usize {
        self.number_of_cols
    }
}

impl Default for Grid {
    fn default() -> Self {
        Grid::from_rows(Vec::new())
    }
}

impl AsRef<[Row]> for Grid {
    fn as_ref(&self) -> &[Row] {
        &self.rows
    }
}

impl<R: Into<Row>> FromIterator<R> for Grid {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        Grid::from_rows(iter.into_iter().map(Into::into).collect())
    }
}

/// Result of [`TextSheet::rows`](crate::sheet::text::TextSheet::rows).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowSelection<'a> {
    /// No end bound was given: the single row at `start`, if it exists.
    Single(Option<&'a [String]>),
    /// Inclusive run of rows, clipped to the grid.
    Range(&'a [Row]),
}

impl<'a> RowSelection<'a> {
    /// Flatten the selection into a list of rows.
    pub fn into_rows(self) -> Vec<&'a [String]> {
        match self {
            RowSelection::Single(row) => row.into_iter().collect(),
            RowSelection::Range(rows) => rows.iter().map(|row| &row[..]).collect(),
        }
    }
}

/// A materialized column: one entry per row, `None` where the row is too short.
pub type Column<'a> = Vec<Option<&'a str>>;

/// Result of [`TextSheet::cols`](crate::sheet::text::TextSheet::cols).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnSelection<'a> {
    /// No end bound was given: the single column at `start`.
    Single(Column<'a>),
    /// One entry per column in the inclusive range, bottom-trimmed.
    Range(Vec<Column<'a>>),
}

impl<'a> ColumnSelection<'a> {
    /// Flatten the selection into a list of columns.
    pub fn into_columns(self) -> Vec<Column<'a>> {
        match self {
            ColumnSelection::Single(column) => vec![column],
            ColumnSelection::Range(columns) => columns,
        }
    }
}

/// Index range covering `start..=end` within a sequence of length `len`.
///
/// Out-of-range bounds are clipped instead of rejected, yielding an empty
/// range when `start` lies past the end.
#[inline]
pub(crate) fn clip_inclusive(len: usize, start: usize, end: usize) -> Range<usize> {
    let lo = start.min(len);
    let hi = end.saturating_add(1).min(len).max(lo);
    lo..hi
}
