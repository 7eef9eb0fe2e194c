//! inference::covariance — sampling covariance from the expected Hessian.
//!
//! Purpose
//! -------
//! Turn a model's expected Hessian at the fitted parameter into the
//! parameter covariance matrix `Σ = −H⁻¹ = (−H)⁻¹`, and fail explicitly when
//! the information matrix `−H` cannot be inverted reliably.
//!
//! Key behaviors
//! -------------
//! - [`estimate_covariance`] requests the expected Hessian into a freshly
//!   allocated `p × p` buffer, validates it, and inverts the information.
//! - [`invert_hessian`] performs the inversion on an already computed
//!   Hessian; it is the numerical core and is exposed for callers that
//!   assemble Hessians themselves.
//! - Singular or ill-conditioned information yields
//!   [`InferenceError::NotInvertible`] rather than partial or NaN-filled
//!   output, and the failure is logged at `warn` level.
//!
//! Invariants & assumptions
//! ------------------------
//! - The expected Hessian is symmetric (model contract). Conditioning is
//!   judged on the symmetric part of `−H`.
//! - The reciprocal condition number is `min |λ| / max |λ|` over the
//!   eigenvalues of `−H`; an all-zero matrix has `rcond = 0`.
//! - `−H` is rejected when `rcond < rcond_tol` or when the LU-based inverse
//!   fails. The default tolerance `1e-14` sits two orders of magnitude above
//!   machine epsilon.
//!
//! Conventions
//! -----------
//! - Matrices use `ndarray` at the API boundary and are copied into
//!   `nalgebra::DMatrix` for the eigen-decomposition and inverse.
//! - The returned covariance is in standard (row-major) layout, aligned with
//!   the coefficient order of the model.
//!
//! Downstream usage
//! ----------------
//! - `inference::Results::from_fit` calls [`estimate_covariance`] and turns
//!   `NotInvertible` into "no covariance", which makes every derived
//!   statistic report absent while point estimates stay usable.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the analytic 2×2 case, the `Σ·H ≈ −I` identity, exact
//!   and near singularity, non-finite entries, and option validation.
use crate::inference::errors::{InferenceError, InferenceResult};
use crate::model::{HessianKind, RegFitter};
use nalgebra::DMatrix;
use ndarray::Array2;

/// Default lower bound on the reciprocal condition number of `−H`.
pub const DEFAULT_RCOND_TOL: f64 = 1e-14;

/// Configuration for covariance estimation.
///
/// - `rcond_tol`: information matrices whose reciprocal condition number
///   falls below this value are reported as not invertible. `0.0` disables
///   the conditioning check, leaving only exact LU failure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CovarianceOptions {
    pub rcond_tol: f64,
}

impl CovarianceOptions {
    /// Construct validated options.
    ///
    /// # Errors
    /// - [`InferenceError::InvalidRcondTol`] unless `0 ≤ rcond_tol < 1`.
    pub fn new(rcond_tol: f64) -> InferenceResult<Self> {
        if !rcond_tol.is_finite() || !(0.0..1.0).contains(&rcond_tol) {
            return Err(InferenceError::InvalidRcondTol {
                tol: rcond_tol,
                reason: "Tolerance must be finite and lie in [0, 1).",
            });
        }
        Ok(Self { rcond_tol })
    }
}

impl Default for CovarianceOptions {
    fn default() -> Self {
        Self { rcond_tol: DEFAULT_RCOND_TOL }
    }
}

/// estimate_covariance — covariance of the estimates from the expected Hessian.
///
/// Parameters
/// ----------
/// - `model`: `&M`
///   Fitted model; its `hessian(·, Expected, ·)` is evaluated once.
/// - `param`: `&M::Param`
///   Point estimate (coefficients plus any auxiliary scalars).
/// - `opts`: `&CovarianceOptions`
///   Conditioning threshold.
///
/// Returns
/// -------
/// `InferenceResult<Array2<f64>>`
///   `p × p` covariance matrix `(−H)⁻¹`.
///
/// Errors
/// ------
/// - `InferenceError::Model` when the model rejects `param` or the buffer.
/// - `InferenceError::NonFiniteHessian` for the first non-finite entry.
/// - `InferenceError::NotInvertible` when `−H` is singular or
///   ill-conditioned.
///
/// Examples
/// --------
/// ```rust
/// # use ndarray::array;
/// # use rust_statmodel::inference::covariance::{CovarianceOptions, invert_hessian};
/// let hess = array![[-4.0, 0.0], [0.0, -1.0]];
/// let cov = invert_hessian(&hess, &CovarianceOptions::default()).unwrap();
/// assert!((cov[[0, 0]] - 0.25).abs() < 1e-12);
/// assert!((cov[[1, 1]] - 1.0).abs() < 1e-12);
/// ```
pub fn estimate_covariance<M: RegFitter>(
    model: &M, param: &M::Param, opts: &CovarianceOptions,
) -> InferenceResult<Array2<f64>> {
    let p = model.num_params();
    let mut hess = Array2::<f64>::zeros((p, p));
    model.hessian(param, HessianKind::Expected, &mut hess)?;
    invert_hessian(&hess, opts).inspect_err(|err| {
        log::warn!("Can't invert expected Hessian: {err}");
    })
}

/// invert_hessian — `(−H)⁻¹` with finiteness and conditioning checks.
///
/// # Errors
/// - [`InferenceError::CovarianceShapeMismatch`] if `hess` is not square.
/// - [`InferenceError::NonFiniteHessian`] for the first non-finite entry.
/// - [`InferenceError::NotInvertible`] if the reciprocal condition number of
///   `−H` is below `opts.rcond_tol` or the LU inverse fails.
pub fn invert_hessian(hess: &Array2<f64>, opts: &CovarianceOptions) -> InferenceResult<Array2<f64>> {
    let p = hess.nrows();
    if hess.ncols() != p {
        return Err(InferenceError::CovarianceShapeMismatch { expected: p, found: hess.dim() });
    }
    for ((row, col), &value) in hess.indexed_iter() {
        if !value.is_finite() {
            return Err(InferenceError::NonFiniteHessian { row, col, value });
        }
    }
    if p == 0 {
        return Ok(Array2::zeros((0, 0)));
    }

    let info = DMatrix::<f64>::from_fn(p, p, |i, j| -hess[[i, j]]);
    let rcond = reciprocal_condition(&info);
    if rcond == 0.0 || rcond < opts.rcond_tol {
        return Err(InferenceError::NotInvertible { rcond });
    }
    let inv = info.try_inverse().ok_or(InferenceError::NotInvertible { rcond })?;
    log::debug!("Inverted {p}x{p} information matrix (rcond = {rcond:e})");
    Ok(Array2::from_shape_fn((p, p), |(i, j)| inv[(i, j)]))
}

// ---- Helper methods ----

/// Ratio of the smallest to the largest absolute eigenvalue of the
/// symmetric part of `m`; `0.0` for a zero matrix.
fn reciprocal_condition(m: &DMatrix<f64>) -> f64 {
    let sym = (m + m.transpose()) * 0.5;
    let eigenvals = sym.symmetric_eigenvalues();
    let max = eigenvals.iter().fold(0.0_f64, |acc, l| acc.max(l.abs()));
    let min = eigenvals.iter().fold(f64::INFINITY, |acc, l| acc.min(l.abs()));
    if max == 0.0 { 0.0 } else { min / max }
}
