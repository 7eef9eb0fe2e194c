//! model::validation — guards and shared arithmetic for model implementers.
//!
//! Concrete `RegFitter` implementations call these helpers at the top of
//! `log_likelihood`, `score`, and `hessian` so that a parameter or buffer of
//! the wrong size becomes a [`ModelError`] instead of an out-of-bounds panic.
//! [`linear_predictor`] is the one piece of arithmetic every GLM-style family
//! shares; the results engine reuses it for fitted values.
use crate::model::{
    errors::{ModelError, ModelResult},
    params::Parameter,
};
use ndarray::{Array1, Array2};

/// Check that `param` carries exactly `expected` coefficients.
///
/// # Errors
/// - [`ModelError::CoefficientLengthMismatch`] otherwise.
pub fn check_coefficients<P: Parameter>(param: &P, expected: usize) -> ModelResult<()> {
    let found = param.num_coefficients();
    if found != expected {
        return Err(ModelError::CoefficientLengthMismatch { expected, found });
    }
    Ok(())
}

/// Check that a score buffer has length `p`.
///
/// # Errors
/// - [`ModelError::ScoreBufferMismatch`] otherwise.
pub fn check_score_buffer(out: &Array1<f64>, p: usize) -> ModelResult<()> {
    if out.len() != p {
        return Err(ModelError::ScoreBufferMismatch { expected: p, found: out.len() });
    }
    Ok(())
}

/// Check that a Hessian buffer is `p × p`.
///
/// # Errors
/// - [`ModelError::HessianBufferMismatch`] otherwise.
pub fn check_hessian_buffer(out: &Array2<f64>, p: usize) -> ModelResult<()> {
    if out.nrows() != p || out.ncols() != p {
        return Err(ModelError::HessianBufferMismatch { expected: p, found: out.dim() });
    }
    Ok(())
}

/// linear_predictor — `η = Σ_k β_k · x_{pos_k}` over the selected columns.
///
/// Parameters
/// ----------
/// - `columns`: `&[Array1<f64>]`
///   All variables, column-wise.
/// - `positions`: `&[usize]`
///   Indices of the predictor columns, aligned with `coefficients`.
/// - `coefficients`: `&Array1<f64>`
///   One coefficient per position.
///
/// Returns
/// -------
/// `ModelResult<Array1<f64>>`
///   Linear predictor with one entry per observation. The observation count
///   is the length of the first selected column, or of the first column when
///   no predictors are selected.
///
/// Errors
/// ------
/// - `ModelError::CoefficientLengthMismatch` when `coefficients` and
///   `positions` differ in length.
/// - `ModelError::PositionOutOfRange` when a position exceeds `columns`.
/// - `ModelError::ColumnLengthMismatch` when selected columns differ in
///   length.
pub fn linear_predictor(
    columns: &[Array1<f64>], positions: &[usize], coefficients: &Array1<f64>,
) -> ModelResult<Array1<f64>> {
    if coefficients.len() != positions.len() {
        return Err(ModelError::CoefficientLengthMismatch {
            expected: positions.len(),
            found: coefficients.len(),
        });
    }
    if let Some(&position) = positions.iter().find(|&&j| j >= columns.len()) {
        return Err(ModelError::PositionOutOfRange { position, columns: columns.len() });
    }

    let n = positions
        .first()
        .map(|&j| columns[j].len())
        .or_else(|| columns.first().map(|c| c.len()))
        .unwrap_or(0);

    let mut eta = Array1::<f64>::zeros(n);
    for (&beta, &j) in coefficients.iter().zip(positions) {
        let x = &columns[j];
        if x.len() != n {
            return Err(ModelError::ColumnLengthMismatch { position: j, expected: n, found: x.len() });
        }
        eta.scaled_add(beta, x);
    }
    Ok(eta)
}
