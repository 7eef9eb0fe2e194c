//! model::check — finite-difference verification of analytic derivatives.
//!
//! Purpose
//! -------
//! Give model implementers a single call that tells them whether their
//! hand-derived score and Hessian agree with their log-likelihood. The
//! inference layer trusts `RegFitter::hessian` blindly, so a sign slip or a
//! missing term there silently corrupts every standard error downstream.
//!
//! Key behaviors
//! -------------
//! - Compare `score` against a central-difference gradient of
//!   `log_likelihood(·, false)`.
//! - Compare the observed Hessian against a central-difference Jacobian of
//!   `score`.
//! - Measure the asymmetry of both the observed and the expected Hessian.
//!
//! Invariants & assumptions
//! ------------------------
//! - Finite differences perturb the coefficients only; auxiliary scalars
//!   carried by the parameter are held fixed via `Parameter::clone`.
//! - Any `ModelError` raised inside a finite-difference closure is captured
//!   in a `RefCell` and returned once the `finitediff` call completes, since
//!   the closures themselves must return plain numbers.
//!
//! Conventions
//! -----------
//! - All discrepancies are scaled as `|a − b| / max(1, |b|)`, i.e. absolute
//!   near zero and relative for large entries.
//!
//! Testing notes
//! -------------
//! - Unit tests run the check on a correct Poisson model and on a model with
//!   a deliberately wrong score.
use crate::model::{
    errors::{ModelError, ModelResult},
    fitter::{HessianKind, RegFitter},
    params::Parameter,
    validation::check_coefficients,
};
use finitediff::FiniteDiff;
use ndarray::{Array1, Array2};
use std::cell::RefCell;

/// Largest scaled discrepancies found by [`check_derivatives`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivativeCheck {
    /// Analytic score vs finite-difference gradient of the log-likelihood.
    pub max_score_error: f64,
    /// Analytic observed Hessian vs finite-difference Jacobian of the score.
    pub max_hessian_error: f64,
    /// Largest `|H[i,j] − H[j,i]|` over both Hessian kinds.
    pub max_asymmetry: f64,
}

impl DerivativeCheck {
    /// `true` when every discrepancy is at most `tol` (NaN never passes).
    pub fn passes(&self, tol: f64) -> bool {
        [self.max_score_error, self.max_hessian_error, self.max_asymmetry]
            .iter()
            .all(|&e| e <= tol)
    }
}

/// check_derivatives — compare analytic derivatives with finite differences.
///
/// Parameters
/// ----------
/// - `model`: `&M`
///   Model under test.
/// - `param`: `&M::Param`
///   Point at which derivatives are compared. Its auxiliary scalars are held
///   fixed while the coefficients are perturbed.
///
/// Returns
/// -------
/// `ModelResult<DerivativeCheck>`
///   Scaled maximum discrepancies; use [`DerivativeCheck::passes`] with a
///   tolerance suited to the model's conditioning (`1e-5` is typical).
///
/// Errors
/// ------
/// - `ModelError::CoefficientLengthMismatch` if `param` does not match
///   `model.num_params()`.
/// - Any `ModelError` the model returns while being evaluated, including
///   inside the finite-difference closures.
pub fn check_derivatives<M: RegFitter>(model: &M, param: &M::Param) -> ModelResult<DerivativeCheck> {
    let p = model.num_params();
    check_coefficients(param, p)?;
    let theta = param.coefficients().clone();
    let closure_err: RefCell<Option<ModelError>> = RefCell::new(None);

    let at = |theta: &Array1<f64>| {
        let mut candidate = param.clone();
        candidate.set_coefficients(theta.clone());
        candidate
    };

    let loglik = |theta: &Array1<f64>| -> f64 {
        match model.log_likelihood(&at(theta), false) {
            Ok(value) => value,
            Err(err) => {
                closure_err.replace(Some(err));
                f64::NAN
            }
        }
    };
    let grad = |theta: &Array1<f64>| -> Array1<f64> {
        let mut out = Array1::<f64>::zeros(p);
        if let Err(err) = model.score(&at(theta), &mut out) {
            closure_err.replace(Some(err));
            out.fill(f64::NAN);
        }
        out
    };

    let fd_score = theta.central_diff(&loglik);
    if let Some(err) = closure_err.take() {
        return Err(err);
    }
    let fd_hessian = theta.central_hessian(&grad);
    if let Some(err) = closure_err.take() {
        return Err(err);
    }

    let mut score = Array1::<f64>::zeros(p);
    model.score(param, &mut score)?;
    let mut observed = Array2::<f64>::zeros((p, p));
    model.hessian(param, HessianKind::Observed, &mut observed)?;
    let mut expected = Array2::<f64>::zeros((p, p));
    model.hessian(param, HessianKind::Expected, &mut expected)?;

    Ok(DerivativeCheck {
        max_score_error: max_scaled_diff(score.iter(), fd_score.iter()),
        max_hessian_error: max_scaled_diff(observed.iter(), fd_hessian.iter()),
        max_asymmetry: asymmetry(&observed).max(asymmetry(&expected)),
    })
}

// ---- Helper methods ----

fn scaled_diff(a: f64, b: f64) -> f64 {
    (a - b).abs() / b.abs().max(1.0)
}

// NaN discrepancies propagate so that `passes` rejects them.
fn max_scaled_diff<'a>(
    a: impl Iterator<Item = &'a f64>, b: impl Iterator<Item = &'a f64>,
) -> f64 {
    a.zip(b).map(|(&x, &y)| scaled_diff(x, y)).fold(0.0, |acc: f64, d| {
        if acc.is_nan() || d.is_nan() { f64::NAN } else { acc.max(d) }
    })
}

fn asymmetry(h: &Array2<f64>) -> f64 {
    max_scaled_diff(h.iter(), h.t().iter())
}
