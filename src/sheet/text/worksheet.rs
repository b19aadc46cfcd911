//! Read-only access to a parsed delimited sheet

use super::formats::delimited::{to_blob, to_file, to_text};
use super::parser::TextParser;
use super::workbook::{PendingTextSheet, Source, TextConfig};
use crate::common::{Blob, Error, File, Result, decode_text};
use crate::sheet::types::clip_inclusive;
use crate::sheet::{Column, ColumnSelection, Grid, Row, RowSelection};

/// Widest column span [`TextSheet::cols`] pads with absent columns, matching
/// the column limit of modern spreadsheet applications.
pub const MAX_PADDED_COLS: usize = 16_384;

/// An immutable, fully parsed delimited sheet.
///
/// Indexes are zero-based. Single-position lookups past the end of the grid
/// or of a ragged row return `None`; only range accessors with inverted
/// bounds fail, with [`Error::InvalidRange`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSheet {
    grid: Grid,
    delimiter: char,
}

impl TextSheet {
    /// Read `source` and wait until it is parsed.
    pub async fn open(source: impl Into<Source>, config: TextConfig) -> Result<Self> {
        PendingTextSheet::new(source, config)?.ready().await
    }

    /// Parse already-decoded text.
    pub fn from_text(text: &str, delimiter: char) -> Self {
        Self::from_grid(TextParser::new(delimiter).parse(text), delimiter)
    }

    /// Decode and parse a raw payload without going through a runtime.
    pub fn from_bytes(bytes: &[u8], config: &TextConfig) -> Self {
        Self::from_text(&decode_text(bytes, config.strip_bom), config.delimiter)
    }

    pub(crate) fn from_grid(grid: Grid, delimiter: char) -> Self {
        TextSheet { grid, delimiter }
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    #[inline]
    pub fn number_of_rows(&self) -> usize {
        self.grid.len()
    }

    /// Length of the longest row.
    #[inline]
    pub fn number_of_cols(&self) -> usize {
        self.grid.number_of_cols()
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.grid.rows().get(row)?.get(col).map(String::as_str)
    }

    pub fn row(&self, row: usize) -> Option<&[String]> {
        self.grid.rows().get(row).map(|row| &row[..])
    }

    /// Materialize column `col`, one entry per row.
    pub fn col(&self, col: usize) -> Column<'_> {
        self.grid
            .rows()
            .iter()
            .map(|row| row.get(col).map(String::as_str))
            .collect()
    }

    pub fn iter_rows(&self) -> impl ExactSizeIterator<Item = &[String]> + '_ {
        self.grid.rows().iter().map(|row| &row[..])
    }

    /// Rows `start..=end`, or the single row `start` when `end` is `None`.
    ///
    /// `Some(0)` is an explicit bound, not a missing one.
    pub fn rows(&self, start: usize, end: Option<usize>) -> Result<RowSelection<'_>> {
        let Some(end) = end else {
            return Ok(RowSelection::Single(self.row(start)));
        };
        if start > end {
            return Err(Error::inverted("row", start, end));
        }
        Ok(RowSelection::Range(self.rows_between(start, end)))
    }

    /// Columns `start..=end`, or the single column `start` when `end` is `None`.
    ///
    /// Each produced column starts with one entry per row. Afterwards,
    /// trailing positions that are `None` in every produced column are
    /// removed from all of them, so the columns always share one length.
    ///
    /// Columns past the widest row are all `None`. A span reaching past both
    /// the widest row and [`MAX_PADDED_COLS`] fails with
    /// [`Error::InvalidRange`] instead of allocating it.
    pub fn cols(&self, start: usize, end: Option<usize>) -> Result<ColumnSelection<'_>> {
        let Some(end) = end else {
            return Ok(ColumnSelection::Single(self.col(start)));
        };
        if start > end {
            return Err(Error::inverted("col", start, end));
        }

        let width = match (end - start).checked_add(1) {
            Some(width) if width <= self.number_of_cols().max(MAX_PADDED_COLS) => width,
            _ => {
                return Err(Error::InvalidRange(format!(
                    "colEnd: {end}, colStart: {start} spans more than {} columns",
                    self.number_of_cols().max(MAX_PADDED_COLS)
                )));
            },
        };

        // Only columns that overlap the grid can hold a value.
        let height = self.number_of_rows();
        let filled = width.min(self.number_of_cols().saturating_sub(start));
        let mut columns: Vec<Column<'_>> = Vec::with_capacity(width);
        columns.resize(filled, vec![None; height]);
        for (row_idx, row) in self.grid.rows().iter().enumerate() {
            let slice = &row[clip_inclusive(row.len(), start, end)];
            for (column, cell) in columns.iter_mut().zip(slice) {
                column[row_idx] = Some(cell.as_str());
            }
        }

        let mut kept = height;
        while kept > 0 && columns.iter().all(|column| column[kept - 1].is_none()) {
            kept -= 1;
        }
        for column in &mut columns {
            column.truncate(kept);
        }
        columns.resize(width, vec![None; kept]);

        Ok(ColumnSelection::Range(columns))
    }

    /// Inclusive rectangle `[row_start, row_end] x [col_start, col_end]`.
    ///
    /// Bounds past the end of the grid or of a row are clipped.
    pub fn range(
        &self,
        row_start: usize,
        col_start: usize,
        row_end: usize,
        col_end: usize,
    ) -> Result<Vec<&[String]>> {
        if row_end < row_start || col_end < col_start {
            return Err(Error::InvalidRange(format!(
                "rowEnd: {row_end}, rowStart: {row_start}, colEnd: {col_end}, colStart: {col_start}"
            )));
        }
        Ok(self
            .rows_between(row_start, row_end)
            .iter()
            .map(|row| &row[clip_inclusive(row.len(), col_start, col_end)])
            .collect())
    }

    /// Serialize back to text with the sheet's own delimiter.
    pub fn to_text(&self) -> String {
        to_text(self.grid.rows(), self.delimiter)
    }

    pub fn to_blob(&self) -> Blob {
        to_blob(self.grid.rows(), self.delimiter)
    }

    pub fn to_file(&self, name: impl Into<String>) -> File {
        to_file(self.grid.rows(), name, self.delimiter)
    }

    fn rows_between(&self, start: usize, end: usize) -> &[Row] {
        let rows = self.grid.rows();
        &rows[clip_inclusive(rows.len(), start, end)]
    }
}
