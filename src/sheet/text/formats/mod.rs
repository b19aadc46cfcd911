//! Format-specific writers for text sheets.

pub mod delimited;

// Re-export common types and functions
pub use delimited::{
    CellText, DEFAULT_MIME_TYPE, mime_type_for, to_blob, to_file, to_text, write_delimited,
};

#[cfg(test)]
mod tests;
