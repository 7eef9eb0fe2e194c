//! summary::errors — failures while assembling or rendering summary tables.
//!
//! Layout problems (columns of different lengths, a formatter that returns
//! the wrong number of cells) and invalid options are reported here; numeric
//! failures from the results layer are wrapped unchanged. An alias
//! `SummaryResult<T>` standardizes the return type.
use crate::inference::errors::InferenceError;

/// Unified error type for summary-table construction and rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum SummaryError {
    // ---- Layout ----
    /// A column has a different number of values from the first column.
    RaggedColumn {
        name: String,
        expected: usize,
        found: usize,
    },

    /// A formatter returned a different number of cells than it was given.
    FormatterLength {
        name: String,
        expected: usize,
        found: usize,
    },

    // ---- Options ----
    /// Cell width must be at least one character.
    InvalidWidth {
        width: usize,
    },

    /// Confidence level must lie strictly between 0 and 1.
    InvalidConfidenceLevel {
        level: f64,
    },

    // ---- Inference ----
    /// Wrapped failure from the results layer.
    Inference(InferenceError),
}

pub type SummaryResult<T> = Result<T, SummaryError>;

impl From<InferenceError> for SummaryError {
    fn from(err: InferenceError) -> Self {
        SummaryError::Inference(err)
    }
}

impl std::error::Error for SummaryError {}

impl std::fmt::Display for SummaryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Layout ----
            SummaryError::RaggedColumn { name, expected, found } => write!(
                f,
                "Summary Error: column '{name}' has {found} values, expected {expected}"
            ),
            SummaryError::FormatterLength { name, expected, found } => write!(
                f,
                "Summary Error: formatter for column '{name}' returned {found} cells, expected {expected}"
            ),

            // ---- Options ----
            SummaryError::InvalidWidth { width } => {
                write!(f, "Summary Error: cell width {width} must be at least 1")
            }
            SummaryError::InvalidConfidenceLevel { level } => {
                write!(f, "Summary Error: confidence level {level} must lie in (0, 1)")
            }

            // ---- Inference ----
            SummaryError::Inference(err) => write!(f, "Summary Error: {err}"),
        }
    }
}
