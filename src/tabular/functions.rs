//! The impls and functions
//!
use std::fmt;
use std::io::{self, Write};
use itertools::{EitherOrBoth, Itertools};
use unicode_width::UnicodeWidthStr;
use crate::tabular::{TabularPrinter, DEFAULT_MARGIN, DEFAULT_SEPARATOR};

impl Default for TabularPrinter {
    fn default() -> Self {
        TabularPrinter::with_layout(DEFAULT_MARGIN, DEFAULT_SEPARATOR)
    }
}

impl TabularPrinter {
    pub fn new() -> Self {
        Default::default()
    }
    pub fn with_layout(
        margin: impl fmt::Display,
        separator: impl fmt::Display,
    ) -> Self
    {
        TabularPrinter {
            margin: margin.to_string(),
            separator: separator.to_string(),
            column_widths: Vec::new(),
            max_columns: 0,
            row_count: 0,
            rows: Vec::new(),
        }
    }
    pub fn row_count(&self) -> usize {
        self.row_count
    }
    pub fn max_columns(&self) -> usize {
        self.max_columns
    }
    pub fn column_widths(&self) -> &[usize] {
        &self.column_widths
    }
    /// Queue a row. The columns are converted to text right away.
    ///
    /// Rows may have any number of columns; a column missing from a row just does not
    /// contribute to that column's width.
    pub fn row(
        &mut self,
        columns: &[&dyn fmt::Display],
    ) -> &mut Self
    {
        let columns: Vec<String> = columns.iter().map(|column| column.to_string()).collect();
        let widths: Vec<usize> = columns.iter().map(|column| column.width()).collect();

        self.column_widths = TabularPrinter::merge_widths(&self.column_widths, &widths);
        self.max_columns = self.max_columns.max(columns.len());
        self.row_count += 1;
        self.rows.push(columns);
        self
    }
    // Zip without truncating the shorter side; an absent width counts as zero.
    fn merge_widths(
        current: &[usize],
        added: &[usize],
    ) -> Vec<usize>
    {
        current
            .iter()
            .zip_longest(added.iter())
            .map(|pair| match pair {
                EitherOrBoth::Both(current, added) => *current.max(added),
                EitherOrBoth::Left(width) | EitherOrBoth::Right(width) => *width,
            })
            .collect()
    }
    /// Write every queued row: the margin, then each column left-justified to its final
    /// width followed by the separator, then a newline.
    pub fn output<W: Write>(
        &self,
        stream: &mut W,
    ) -> io::Result<()>
    {
        for row in &self.rows {
            stream.write_all(self.margin.as_bytes())?;
            for (column, width) in row.iter().zip(self.column_widths.iter()) {
                let padding = width.saturating_sub(column.width());
                write!(stream, "{}{:padding$}{}", column, "", self.separator, padding = padding)?;
            }
            writeln!(stream)?;
        }
        Ok(())
    }
    pub fn print(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.output(&mut handle)?;
        handle.flush()
    }
}

impl fmt::Display for TabularPrinter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut buffer = Vec::new();
        self.output(&mut buffer).map_err(|_| fmt::Error)?;
        f.write_str(&String::from_utf8_lossy(&buffer))
    }
}
