//! summary::format — column values and the standard cell formatters.
//!
//! A [`Formatter`] turns a column's values (and its name, for formatters
//! that care) into display strings, one per value. Rendering never looks at
//! the numbers themselves; precision and units live entirely here or in a
//! caller-supplied closure.
//!
//! Absent numbers (`None`) always render as [`NA_MARKER`], never as `0` or
//! `NaN`, so unavailable statistics are visibly unavailable. A present `NaN`
//! (for example the z-score of a zero estimate with zero variance) carries
//! no value either and renders the same way; infinities print as `inf`.
use ndarray::Array1;

/// Marker rendered in place of an absent number.
pub const NA_MARKER: &str = "NA";

/// Values of one summary column.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnValues {
    /// Numeric cells; `None` marks a value that is not available.
    Numbers(Vec<Option<f64>>),
    Text(Vec<String>),
}

impl ColumnValues {
    pub fn len(&self) -> usize {
        match self {
            ColumnValues::Numbers(v) => v.len(),
            ColumnValues::Text(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Numeric column from an optional vector; `None` yields `len` absent
    /// cells.
    pub fn from_optional(values: Option<&Array1<f64>>, len: usize) -> Self {
        match values {
            Some(v) => v.into(),
            None => ColumnValues::Numbers(vec![None; len]),
        }
    }
}

impl From<&Array1<f64>> for ColumnValues {
    fn from(values: &Array1<f64>) -> Self {
        ColumnValues::Numbers(values.iter().map(|&v| Some(v)).collect())
    }
}

impl From<Vec<f64>> for ColumnValues {
    fn from(values: Vec<f64>) -> Self {
        ColumnValues::Numbers(values.into_iter().map(Some).collect())
    }
}

impl From<Vec<Option<f64>>> for ColumnValues {
    fn from(values: Vec<Option<f64>>) -> Self {
        ColumnValues::Numbers(values)
    }
}

impl From<Vec<String>> for ColumnValues {
    fn from(values: Vec<String>) -> Self {
        ColumnValues::Text(values)
    }
}

/// Cell formatter: `(values, column_name) -> one string per value`.
pub type Formatter = Box<dyn Fn(&ColumnValues, &str) -> Vec<String> + Send + Sync>;

/// Fixed-point numbers right-aligned in at least `width` characters with
/// `precision` decimals. Text values pass through right-aligned.
pub fn numeric(width: usize, precision: usize) -> Formatter {
    Box::new(move |values: &ColumnValues, _name: &str| match values {
        ColumnValues::Numbers(v) => v
            .iter()
            .map(|x| match x {
                Some(x) if !x.is_nan() => format!("{x:>width$.precision$}"),
                _ => format!("{NA_MARKER:>width$}"),
            })
            .collect(),
        ColumnValues::Text(v) => v.iter().map(|s| format!("{s:>width$}")).collect(),
    })
}

/// Values right-aligned in at least `width` characters, numbers in their
/// shortest `Display` form.
pub fn text(width: usize) -> Formatter {
    Box::new(move |values: &ColumnValues, _name: &str| match values {
        ColumnValues::Text(v) => v.iter().map(|s| format!("{s:>width$}")).collect(),
        ColumnValues::Numbers(v) => v
            .iter()
            .map(|x| match x {
                Some(x) if !x.is_nan() => format!("{x:>width$}"),
                _ => format!("{NA_MARKER:>width$}"),
            })
            .collect(),
    })
}
