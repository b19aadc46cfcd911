//! Delimited text (CSV/TSV/DSV) writer.
//!
//! Cells are joined with the delimiter and rows with `\n`. Nothing is quoted
//! or escaped, and no newline is appended after the last row, so text read
//! with the same delimiter is reproduced byte for byte when it had no
//! trailing newline and no ragged rows.

use std::borrow::Cow;
use std::io::Write;

use phf::phf_map;

use crate::common::{Blob, File, Result};

/// MIME type used for delimiters without a dedicated entry.
pub const DEFAULT_MIME_TYPE: &str = "text/dsv";

static MIME_TYPES: phf::Map<char, &'static str> = phf_map! {
    ',' => "text/csv",
    '\t' => "text/tsv",
};

/// MIME type for text joined with `delimiter`.
#[inline]
pub fn mime_type_for(delimiter: char) -> &'static str {
    MIME_TYPES.get(&delimiter).copied().unwrap_or(DEFAULT_MIME_TYPE)
}

/// A value that can be written as the text of one cell.
///
/// `None` writes nothing, the same as an absent cell.
pub trait CellText {
    fn write_cell(&self, out: &mut String);
}

impl CellText for str {
    fn write_cell(&self, out: &mut String) {
        out.push_str(self);
    }
}

impl CellText for String {
    fn write_cell(&self, out: &mut String) {
        out.push_str(self);
    }
}

impl CellText for Cow<'_, str> {
    fn write_cell(&self, out: &mut String) {
        out.push_str(self);
    }
}

impl<T: CellText + ?Sized> CellText for &T {
    fn write_cell(&self, out: &mut String) {
        (**self).write_cell(out);
    }
}

impl<T: CellText> CellText for Option<T> {
    fn write_cell(&self, out: &mut String) {
        if let Some(value) = self {
            value.write_cell(out);
        }
    }
}

impl CellText for bool {
    fn write_cell(&self, out: &mut String) {
        out.push_str(if *self { "true" } else { "false" });
    }
}

macro_rules! impl_cell_text_int {
    ($($t:ty),*) => {
        $(
            impl CellText for $t {
                fn write_cell(&self, out: &mut String) {
                    out.push_str(itoa::Buffer::new().format(*self));
                }
            }
        )*
    };
}

impl_cell_text_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_cell_text_float {
    ($($t:ty),*) => {
        $(
            impl CellText for $t {
                fn write_cell(&self, out: &mut String) {
                    if self.is_nan() {
                        out.push_str("NaN");
                    } else if self.is_infinite() {
                        out.push_str(if self.is_sign_positive() { "Infinity" } else { "-Infinity" });
                    } else {
                        let mut buffer = ryu::Buffer::new();
                        let formatted = buffer.format_finite(*self);
                        out.push_str(formatted.strip_suffix(".0").unwrap_or(formatted));
                    }
                }
            }
        )*
    };
}

impl_cell_text_float!(f32, f64);

fn push_row<C: CellText>(row: &[C], delimiter: char, out: &mut String) {
    for (col_idx, cell) in row.iter().enumerate() {
        if col_idx > 0 {
            out.push(delimiter);
        }
        cell.write_cell(out);
    }
}

/// Join `grid` into delimited text.
pub fn to_text<R, C>(grid: &[R], delimiter: char) -> String
where
    R: AsRef<[C]>,
    C: CellText,
{
    let mut out = String::new();
    for (row_idx, row) in grid.iter().enumerate() {
        if row_idx > 0 {
            out.push('\n');
        }
        push_row(row.as_ref(), delimiter, &mut out);
    }
    out
}

/// Stream `grid` as delimited text into `writer`.
///
/// Produces exactly the bytes of [`to_text`].
pub fn write_delimited<R, C, W>(grid: &[R], writer: &mut W, delimiter: char) -> Result<()>
where
    R: AsRef<[C]>,
    C: CellText,
    W: Write,
{
    let mut line = String::new();
    for (row_idx, row) in grid.iter().enumerate() {
        line.clear();
        if row_idx > 0 {
            line.push('\n');
        }
        push_row(row.as_ref(), delimiter, &mut line);
        writer.write_all(line.as_bytes())?;
    }
    Ok(())
}

/// Serialize `grid` into an anonymous blob typed after `delimiter`.
pub fn to_blob<R, C>(grid: &[R], delimiter: char) -> Blob
where
    R: AsRef<[C]>,
    C: CellText,
{
    Blob::new(to_text(grid, delimiter), mime_type_for(delimiter))
}

/// Serialize `grid` into a named file typed after `delimiter`.
pub fn to_file<R, C>(grid: &[R], name: impl Into<String>, delimiter: char) -> File
where
    R: AsRef<[C]>,
    C: CellText,
{
    File::from_blob(to_blob(grid, delimiter), name)
}
