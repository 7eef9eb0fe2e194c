//! model::errors — contract violations raised by model implementations.
//!
//! `ModelError` collects the programmer errors a concrete model detects when
//! it is called with inconsistent inputs: parameter vectors of the wrong
//! length, output buffers of the wrong shape, or invalid auxiliary scalars.
//! An alias `ModelResult<T>` standardizes the return type of every
//! `RegFitter` method.

use crate::data::errors::DataError;

/// Unified error type for the model contract.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelError {
    // ---- Parameters ----
    /// Coefficient vector length does not match the model's parameter count.
    CoefficientLengthMismatch {
        expected: usize,
        found: usize,
    },

    /// Model-specific auxiliary scalar (dispersion, shape, ...) is invalid.
    InvalidAuxiliary {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    // ---- Output buffers ----
    /// Score buffer length does not match the parameter count.
    ScoreBufferMismatch {
        expected: usize,
        found: usize,
    },

    /// Hessian buffer shape is not `p × p`.
    HessianBufferMismatch {
        expected: usize,
        found: (usize, usize),
    },

    // ---- Data ----
    /// A predictor position points past the available columns.
    PositionOutOfRange {
        position: usize,
        columns: usize,
    },

    /// Predictor columns used for the linear predictor differ in length.
    ColumnLengthMismatch {
        position: usize,
        expected: usize,
        found: usize,
    },

    /// Wrapped dataset error raised while binding a model to its data.
    Data(DataError),
}

pub type ModelResult<T> = Result<T, ModelError>;

impl From<DataError> for ModelError {
    fn from(err: DataError) -> Self {
        ModelError::Data(err)
    }
}

impl std::error::Error for ModelError {}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Parameters ----
            ModelError::CoefficientLengthMismatch { expected, found } => {
                write!(f, "Model Error: coefficient length mismatch: expected {expected}, found {found}")
            }
            ModelError::InvalidAuxiliary { name, value, reason } => {
                write!(f, "Model Error: invalid auxiliary parameter '{name}' = {value}: {reason}")
            }

            // ---- Output buffers ----
            ModelError::ScoreBufferMismatch { expected, found } => {
                write!(f, "Model Error: score buffer length mismatch: expected {expected}, found {found}")
            }
            ModelError::HessianBufferMismatch { expected, found } => write!(
                f,
                "Model Error: Hessian buffer shape mismatch: expected ({expected}, {expected}), found {found:?}"
            ),

            // ---- Data ----
            ModelError::PositionOutOfRange { position, columns } => write!(
                f,
                "Model Error: predictor position {position} out of range for {columns} columns"
            ),
            ModelError::ColumnLengthMismatch { position, expected, found } => write!(
                f,
                "Model Error: column {position} has length {found}, expected {expected}"
            ),
            ModelError::Data(err) => write!(f, "Model Error: {err}"),
        }
    }
}
