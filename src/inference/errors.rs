//! Unified error handling for inference routines.
//!
//! This module defines `InferenceError`, the central error type used by
//! covariance estimation and the results engine. It separates the one
//! expected, data-dependent failure (`NotInvertible`, recovered by callers as
//! "no covariance") from contract violations (mismatched lengths and shapes),
//! wraps model-side errors, and keeps a catch-all variant. An alias
//! `InferenceResult<T>` standardizes the return type across inference code.
use crate::model::errors::ModelError;

/// Unified error type for inference routines.
///
/// Designed to integrate with `anyhow::Error` via `From`, and to provide
/// readable diagnostics through `Display`.
#[derive(Debug, Clone, PartialEq)]
pub enum InferenceError {
    // ---- Covariance ----
    /// The information matrix is singular or too ill-conditioned to invert.
    NotInvertible {
        rcond: f64,
    },

    /// The model returned a non-finite Hessian entry.
    NonFiniteHessian {
        row: usize,
        col: usize,
        value: f64,
    },

    /// Reciprocal-condition tolerance must lie in `[0, 1)`.
    InvalidRcondTol {
        tol: f64,
        reason: &'static str,
    },

    // ---- Results construction ----
    /// Point estimate length differs from the model's parameter count.
    ParamsLengthMismatch {
        expected: usize,
        found: usize,
    },

    /// Number of coefficient names differs from the parameter count.
    NamesLengthMismatch {
        expected: usize,
        found: usize,
    },

    /// Covariance matrix is not `p × p`.
    CovarianceShapeMismatch {
        expected: usize,
        found: (usize, usize),
    },

    // ---- Fitted values ----
    /// Prediction data has a different number of columns than the training data.
    ColumnCountMismatch {
        expected: usize,
        found: usize,
    },

    // ---- Intervals ----
    /// Confidence level must lie strictly between 0 and 1.
    InvalidConfidenceLevel {
        level: f64,
    },

    // ---- Model ----
    /// Wrapped model contract violation.
    Model(ModelError),

    // ---- Anyhow catchall ----
    /// Failure raised outside this crate and converted with `?`, e.g. by a
    /// downstream fitting driver or family crate that reports `anyhow::Error`
    /// while assembling results.
    Anyhow(String),
}

pub type InferenceResult<T> = Result<T, InferenceError>;

impl From<ModelError> for InferenceError {
    fn from(err: ModelError) -> Self {
        InferenceError::Model(err)
    }
}

impl From<anyhow::Error> for InferenceError {
    fn from(err: anyhow::Error) -> Self {
        InferenceError::Anyhow(err.to_string())
    }
}

impl std::error::Error for InferenceError {}

impl std::fmt::Display for InferenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Covariance ----
            InferenceError::NotInvertible { rcond } => write!(
                f,
                "Inference Error: information matrix is not invertible (rcond = {rcond:e})"
            ),
            InferenceError::NonFiniteHessian { row, col, value } => {
                write!(f, "Inference Error: Hessian entry ({row}, {col}) is {value}, must be finite")
            }
            InferenceError::InvalidRcondTol { tol, reason } => {
                write!(f, "Inference Error: invalid rcond tolerance {tol}: {reason}")
            }

            // ---- Results construction ----
            InferenceError::ParamsLengthMismatch { expected, found } => write!(
                f,
                "Inference Error: parameter length mismatch: expected {expected}, found {found}"
            ),
            InferenceError::NamesLengthMismatch { expected, found } => write!(
                f,
                "Inference Error: coefficient names length mismatch: expected {expected}, found {found}"
            ),
            InferenceError::CovarianceShapeMismatch { expected, found } => write!(
                f,
                "Inference Error: covariance shape mismatch: expected ({expected}, {expected}), found {found:?}"
            ),

            // ---- Fitted values ----
            InferenceError::ColumnCountMismatch { expected, found } => write!(
                f,
                "Inference Error: data has incorrect number of columns, {found} != {expected}"
            ),

            // ---- Intervals ----
            InferenceError::InvalidConfidenceLevel { level } => {
                write!(f, "Inference Error: confidence level {level} must lie in (0, 1)")
            }

            // ---- Model ----
            InferenceError::Model(err) => write!(f, "Inference Error: {err}"),

            // ---- Anyhow catchall ----
            InferenceError::Anyhow(msg) => write!(f, "Inference Error: {msg}"),
        }
    }
}
