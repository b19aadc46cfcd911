//! Line and delimiter splitting for delimited text

use memchr::Memchr;

use crate::sheet::{Grid, Row};

/// Splits decoded text into a [`Grid`].
///
/// Lines end at `\n` only, and cells end at the delimiter. Quotes carry no
/// meaning, so a delimiter or line feed can never appear inside a cell.
#[derive(Debug, Clone, Copy)]
pub struct TextParser {
    delimiter: char,
}

impl TextParser {
    /// Create a new text parser
    pub fn new(delimiter: char) -> Self {
        TextParser { delimiter }
    }

    /// Parse the whole text in one pass.
    ///
    /// Splitting is exhaustive: empty text gives one row holding one empty
    /// cell, and a trailing line feed gives a final `[""]` row.
    pub fn parse(&self, text: &str) -> Grid {
        let rows: Vec<Row> = Fields::new(text, b'\n').map(|line| self.parse_row(line)).collect();
        let grid = Grid::from_rows(rows);
        tracing::debug!(
            rows = grid.len(),
            cols = grid.number_of_cols(),
            delimiter = ?self.delimiter,
            "parsed delimited text"
        );
        grid
    }

    /// Split one line into cells.
    pub fn parse_row(&self, line: &str) -> Row {
        if self.delimiter.is_ascii() {
            Fields::new(line, self.delimiter as u8).map(str::to_owned).collect()
        } else {
            line.split(self.delimiter).map(str::to_owned).collect()
        }
    }
}

/// Parse `text` using `delimiter`.
pub fn parse_delimited(text: &str, delimiter: char) -> Grid {
    TextParser::new(delimiter).parse(text)
}

/// Iterator over the pieces of `haystack` between occurrences of an ASCII byte.
///
/// Behaves like `str::split` with a single-byte pattern. ASCII bytes never
/// occur inside a multi-byte UTF-8 sequence, so every split point is a char
/// boundary.
struct Fields<'a> {
    haystack: &'a str,
    positions: Memchr<'a>,
    start: usize,
    finished: bool,
}

impl<'a> Fields<'a> {
    fn new(haystack: &'a str, byte: u8) -> Self {
        debug_assert!(byte.is_ascii());
        Fields {
            haystack,
            positions: memchr::memchr_iter(byte, haystack.as_bytes()),
            start: 0,
            finished: false,
        }
    }
}

impl<'a> Iterator for Fields<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.finished {
            return None;
        }
        match self.positions.next() {
            Some(end) => {
                let field = &self.haystack[self.start..end];
                self.start = end + 1;
                Some(field)
            },
            None => {
                self.finished = true;
                Some(&self.haystack[self.start..])
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows_of(grid: &Grid) -> Vec<Vec<&str>> {
        grid.rows()
            .iter()
            .map(|row| row.iter().map(String::as_str).collect())
            .collect()
    }

    #[test]
    fn test_simple_csv_parsing() {
        let grid = parse_delimited("name,age,city\nJohn,25,New York\nJane,30,London", ',');
        assert_eq!(
            rows_of(&grid),
            vec![
                vec!["name", "age", "city"],
                vec!["John", "25", "New York"],
                vec!["Jane", "30", "London"],
            ]
        );
    }

    #[test]
    fn test_quotes_are_plain_characters() {
        let grid = parse_delimited("\"Hello, World\",x", ',');
        assert_eq!(rows_of(&grid), vec![vec!["\"Hello", " World\"", "x"]]);
    }

    #[test]
    fn test_tsv_parsing() {
        let grid = parse_delimited("name\tage\nJohn\t25", '\t');
        assert_eq!(rows_of(&grid), vec![vec!["name", "age"], vec!["John", "25"]]);
    }

    #[test]
    fn test_trailing_newline_adds_empty_row() {
        let grid = parse_delimited("a,b,c\n1,2\n", ',');
        assert_eq!(rows_of(&grid), vec![vec!["a", "b", "c"], vec!["1", "2"], vec![""]]);
        assert_eq!(grid.len(), 3);
        assert_eq!(grid.number_of_cols(), 3);
    }

    #[test]
    fn test_empty_text_is_one_empty_cell() {
        let grid = parse_delimited("", ',');
        assert_eq!(rows_of(&grid), vec![vec![""]]);
        assert_eq!(grid.number_of_cols(), 1);
    }

    #[test]
    fn test_carriage_return_is_cell_content() {
        let grid = parse_delimited("a,b\r\nc,d", ',');
        assert_eq!(rows_of(&grid), vec![vec!["a", "b\r"], vec!["c", "d"]]);
    }

    #[test]
    fn test_multibyte_delimiter_and_content() {
        let grid = parse_delimited("é§ü\n日本§語", '§');
        assert_eq!(rows_of(&grid), vec![vec!["é", "ü"], vec!["日本", "語"]]);

        let grid = parse_delimited("é|ü|", '|');
        assert_eq!(rows_of(&grid), vec![vec!["é", "ü", ""]]);
    }
}
