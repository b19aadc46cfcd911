//! Tests for the delimited writer

use super::*;
use std::borrow::Cow;

#[test]
fn test_to_text_joins_rows_without_trailing_newline() {
    assert_eq!(to_text(&[["x", "y"], ["z", "w"]], ','), "x,y\nz,w");
}

#[test]
fn test_to_text_ragged_and_empty_rows() {
    let grid: Vec<Vec<&str>> = vec![vec!["a", "b", "c"], vec!["1"], vec![]];
    assert_eq!(to_text(&grid, ';'), "a;b;c\n1\n");
    assert_eq!(to_text::<Vec<&str>, &str>(&[], ','), "");
}

#[test]
fn test_absent_cells_write_nothing() {
    let grid = vec![vec![Some("a"), None, Some("c")]];
    assert_eq!(to_text(&grid, ','), "a,,c");
}

#[test]
fn test_numeric_and_bool_cells() {
    assert_eq!(to_text(&[[1i64, -20, 300]], '\t'), "1\t-20\t300");
    assert_eq!(to_text(&[[1.0f64, 2.5, -0.125]], ','), "1,2.5,-0.125");
    assert_eq!(
        to_text(&[[f64::NAN, f64::INFINITY, f64::NEG_INFINITY]], ','),
        "NaN,Infinity,-Infinity"
    );
    assert_eq!(to_text(&[[true, false]], '|'), "true|false");
}

#[test]
fn test_cow_cells() {
    let grid = vec![vec![Cow::Borrowed("a"), Cow::Owned("b".to_string())]];
    assert_eq!(to_text(&grid, ','), "a,b");
}

#[test]
fn test_write_delimited_matches_to_text() {
    let grid = vec![vec!["id", "name"], vec!["1", "Ada"], vec!["2"]];
    let mut output = Vec::new();
    write_delimited(&grid, &mut output, '\t').unwrap();
    assert_eq!(String::from_utf8(output).unwrap(), to_text(&grid, '\t'));
}

#[test]
fn test_mime_type_table() {
    assert_eq!(mime_type_for(','), "text/csv");
    assert_eq!(mime_type_for('\t'), "text/tsv");
    assert_eq!(mime_type_for(';'), DEFAULT_MIME_TYPE);
    assert_eq!(mime_type_for('|'), "text/dsv");
}

#[test]
fn test_blob_and_file_exports() {
    let grid = [["a", "b"], ["c", "d"]];

    let blob = to_blob(&grid, '\t');
    assert_eq!(blob.mime_type(), "text/tsv");
    assert_eq!(blob.bytes().as_ref(), b"a\tb\nc\td");

    let file = to_file(&grid, "export.dsv", ';');
    assert_eq!(file.name(), "export.dsv");
    assert_eq!(file.mime_type(), "text/dsv");
    assert_eq!(file.text(), "a;b\nc;d");

    // Every call allocates a fresh export.
    let again = to_blob(&grid, '\t');
    assert_eq!(again, blob);
}
