//! data::errors — construction-time failures for datasets.
//!
//! Every variant describes an unsupported configuration detected before any
//! numeric work happens: names that do not line up with columns, ragged
//! columns, or declared roles (response / predictors) that refer to unknown
//! variables. An alias `DataResult<T>` standardizes the return type.

/// Unified error type for dataset construction and lookups.
#[derive(Debug, Clone, PartialEq)]
pub enum DataError {
    // ---- Shape ----
    /// No columns were supplied.
    EmptyDataset,

    /// Number of names does not match the number of columns.
    NamesLengthMismatch {
        columns: usize,
        names: usize,
    },

    /// A column has a different length from the first column.
    ColumnLengthMismatch {
        name: String,
        expected: usize,
        found: usize,
    },

    // ---- Names ----
    /// The same variable name appears more than once.
    DuplicateVariable {
        name: String,
    },

    /// The declared response is not among the variable names.
    UnknownResponse {
        name: String,
    },

    /// A declared predictor is not among the variable names.
    UnknownPredictor {
        name: String,
    },
}

pub type DataResult<T> = Result<T, DataError>;

impl std::error::Error for DataError {}

impl std::fmt::Display for DataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Shape ----
            DataError::EmptyDataset => write!(f, "Dataset Error: no columns supplied"),
            DataError::NamesLengthMismatch { columns, names } => write!(
                f,
                "Dataset Error: {names} variable names supplied for {columns} columns"
            ),
            DataError::ColumnLengthMismatch { name, expected, found } => write!(
                f,
                "Dataset Error: column '{name}' has length {found}, expected {expected}"
            ),

            // ---- Names ----
            DataError::DuplicateVariable { name } => {
                write!(f, "Dataset Error: variable '{name}' appears more than once")
            }
            DataError::UnknownResponse { name } => {
                write!(f, "Dataset Error: response '{name}' is not a variable in the dataset")
            }
            DataError::UnknownPredictor { name } => {
                write!(f, "Dataset Error: predictor '{name}' is not a variable in the dataset")
            }
        }
    }
}
