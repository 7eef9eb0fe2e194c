//! summary::table — fixed-width text layout for model summaries.
//!
//! Purpose
//! -------
//! Render a title, a block of metadata entries, and named columns of
//! formatted values as a plain-text table for terminals and reports. This is
//! pure layout: every number is turned into text by the column's
//! [`Formatter`] before any width is measured.
//!
//! Key behaviors
//! -------------
//! - Output order: centered title, `=` rule, metadata block, `-` rule,
//!   right-justified header row, `-` rule, one row per value, `-` rule,
//!   then trailing messages, each on its own line.
//! - Metadata entries are padded to the widest entry and laid out two per
//!   line, separated by `gap` spaces; trailing blanks are trimmed.
//! - Column width is the widest of the header and every formatted cell.
//! - Total width is the largest of: the sum of column widths, the title
//!   width, and `gap + 2 × entry width` (only when metadata is present).
//!
//! Invariants & assumptions
//! ------------------------
//! - All columns hold the same number of values and each formatter returns
//!   one cell per value; violations are reported as [`SummaryError`].
//! - Widths count `char`s, so multi-byte labels such as `σ²` align.
//! - `render` borrows the table immutably and can be called repeatedly.
//!
//! Testing notes
//! -------------
//! - Unit tests pin an exact rendering, the width lower bounds, the empty
//!   metadata case, and both layout errors.
use crate::summary::{
    errors::{SummaryError, SummaryResult},
    format::{ColumnValues, Formatter},
};
use std::fmt;

/// Default number of blanks between the two metadata entries on a line.
pub const DEFAULT_GAP: usize = 10;

struct Column {
    name: String,
    values: ColumnValues,
    formatter: Formatter,
}

/// `SummaryTable` — builder and renderer for a summary text block.
///
/// Built fluently:
///
/// ```
/// use rust_statmodel::summary::{SummaryTable, numeric, text};
///
/// let out = SummaryTable::new("Fit")
///     .top("Observations: 7")
///     .column("Variable", vec!["icept".to_string()], text(8))
///     .column("Parameter", vec![0.25], numeric(10, 4))
///     .message("Converged.")
///     .render()
///     .unwrap();
/// assert!(out.contains("0.2500"));
/// ```
pub struct SummaryTable {
    title: String,
    top: Vec<String>,
    columns: Vec<Column>,
    messages: Vec<String>,
    gap: usize,
}

impl SummaryTable {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            top: Vec::new(),
            columns: Vec::new(),
            messages: Vec::new(),
            gap: DEFAULT_GAP,
        }
    }

    /// Append a metadata entry (typically `"key: value"`).
    pub fn top(mut self, entry: impl Into<String>) -> Self {
        self.top.push(entry.into());
        self
    }

    /// Append a column with the formatter that turns its values into cells.
    pub fn column(
        mut self, name: impl Into<String>, values: impl Into<ColumnValues>, formatter: Formatter,
    ) -> Self {
        self.columns.push(Column { name: name.into(), values: values.into(), formatter });
        self
    }

    /// Append a free-text line printed below the table.
    pub fn message(mut self, msg: impl Into<String>) -> Self {
        self.messages.push(msg.into());
        self
    }

    /// Blanks between paired metadata entries.
    pub fn gap(mut self, gap: usize) -> Self {
        self.gap = gap;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Render the table as text.
    ///
    /// Errors
    /// ------
    /// - `SummaryError::RaggedColumn` if a column's length differs from the
    ///   first column's.
    /// - `SummaryError::FormatterLength` if a formatter returns the wrong
    ///   number of cells.
    pub fn render(&self) -> SummaryResult<String> {
        let n_rows = self.columns.first().map_or(0, |c| c.values.len());

        let mut cells = Vec::with_capacity(self.columns.len());
        let mut widths = Vec::with_capacity(self.columns.len());
        for col in &self.columns {
            if col.values.len() != n_rows {
                return Err(SummaryError::RaggedColumn {
                    name: col.name.clone(),
                    expected: n_rows,
                    found: col.values.len(),
                });
            }
            let formatted = (col.formatter)(&col.values, &col.name);
            if formatted.len() != n_rows {
                return Err(SummaryError::FormatterLength {
                    name: col.name.clone(),
                    expected: n_rows,
                    found: formatted.len(),
                });
            }
            let width = formatted
                .iter()
                .map(|s| display_width(s))
                .fold(display_width(&col.name), usize::max);
            widths.push(width);
            cells.push(formatted);
        }

        let title_width = display_width(&self.title);
        let entry_width = self.top.iter().map(|s| display_width(s)).max();
        let mut total = widths.iter().sum::<usize>().max(title_width);
        if let Some(w) = entry_width {
            total = total.max(self.gap + 2 * w);
        }

        let mut out = String::new();
        out.push_str(&" ".repeat((total - title_width) / 2));
        out.push_str(&self.title);
        out.push('\n');
        push_rule(&mut out, '=', total);

        if let Some(w) = entry_width {
            let gap = " ".repeat(self.gap);
            for pair in self.top.chunks(2) {
                let line = match pair {
                    [left, right] => format!("{left:<w$}{gap}{right}"),
                    _ => pair[0].clone(),
                };
                out.push_str(line.trim_end());
                out.push('\n');
            }
        }
        push_rule(&mut out, '-', total);

        for (col, &w) in self.columns.iter().zip(&widths) {
            out.push_str(&format!("{:>w$}", col.name));
        }
        out.push('\n');
        push_rule(&mut out, '-', total);

        for i in 0..n_rows {
            for (col_cells, &w) in cells.iter().zip(&widths) {
                out.push_str(&format!("{:>w$}", col_cells[i]));
            }
            out.push('\n');
        }
        push_rule(&mut out, '-', total);

        for msg in &self.messages {
            out.push_str(msg);
            out.push('\n');
        }
        Ok(out)
    }
}

impl fmt::Debug for SummaryTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SummaryTable")
            .field("title", &self.title)
            .field("top", &self.top)
            .field("columns", &self.columns.iter().map(|c| &c.name).collect::<Vec<_>>())
            .field("messages", &self.messages)
            .field("gap", &self.gap)
            .finish()
    }
}

fn display_width(s: &str) -> usize {
    s.chars().count()
}

fn push_rule(out: &mut String, c: char, width: usize) {
    out.extend(std::iter::repeat_n(c, width));
    out.push('\n');
}
