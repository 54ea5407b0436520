//! The structs
//!
/// Margin written at the start of every row.
pub const DEFAULT_MARGIN: &str = "    ";
/// Written after every column, including the last.
pub const DEFAULT_SEPARATOR: &str = "  ";

/// Buffered rows plus the running per-column maximum width.
///
/// `column_widths` is at least as long as the longest row added so far, and every width is at
/// least the display width of every cell seen in that column. Rows are never removed.
///
/// Width is the terminal display width of the text (`unicode-width`), not its char count: wide
/// characters count as two columns and combining marks as none, so `"e\u{301}"` is one column.
#[derive(Debug, Clone)]
pub struct TabularPrinter {
    pub(crate) margin: String,
    pub(crate) separator: String,
    pub(crate) column_widths: Vec<usize>,
    pub(crate) max_columns: usize,
    pub(crate) row_count: usize,
    pub(crate) rows: Vec<Vec<String>>,
}
