//! model::fitter — the contract every concrete regression model implements.
//!
//! Purpose
//! -------
//! Pin down the minimal capability set the inference layer needs from a
//! model family so that covariance estimation, standard errors, and summary
//! output stay family-agnostic. A model binds a dataset to a likelihood
//! family/link and exposes the log-likelihood together with its first and
//! second derivatives.
//!
//! Key behaviors
//! -------------
//! - [`RegFitter`] reports counts and predictor positions and evaluates the
//!   log-likelihood, score, and Hessian at a given [`Parameter`].
//! - [`HessianKind`] selects observed (actual second derivative) or expected
//!   (Fisher information) curvature.
//!
//! Invariants & assumptions
//! ------------------------
//! - `score` writes into a caller-owned buffer of length `num_params()`.
//! - `hessian` writes into a caller-owned `num_params() × num_params()`
//!   buffer in standard (row-major) layout.
//! - Buffer contents are overwritten, never accumulated.
//! - Both Hessian kinds are symmetric; the expected Hessian is negative
//!   semi-definite at the optimum.
//! - `log_likelihood(θ, false)` and `log_likelihood(θ, true)` differ by a
//!   constant that does not depend on `θ`.
//!
//! Conventions
//! -----------
//! - Models are immutable after construction. Anything a model writes during
//!   evaluation goes into the caller's buffers. A model that keeps internal
//!   scratch space must not be shared across threads without its own guard.
//! - Implementations call the helpers in `model::validation` first and return
//!   a [`ModelError`](crate::model::ModelError) on mismatched lengths instead
//!   of indexing out of bounds.
//!
//! Downstream usage
//! ----------------
//! - An external optimizer calls `log_likelihood(θ, false)`, `score`, and
//!   `hessian` repeatedly, reusing the same buffers.
//! - `inference::estimate_covariance` calls `hessian(θ̂, Expected, ·)` once.
//! - `inference::Results` reads `num_params`, `num_obs`,
//!   `predictor_positions`, and `dataset` to compute fitted values.
use crate::model::{errors::ModelResult, params::Parameter};
use ndarray::{Array1, Array2};

/// Which curvature a Hessian evaluation should return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HessianKind {
    /// Second derivative of the log-likelihood at the data.
    Observed,
    /// Expected (Fisher) information, negated.
    Expected,
}

/// A regression model that can be fit to data.
pub trait RegFitter {
    /// Parameter type the model is evaluated at.
    type Param: Parameter;

    /// Number of coefficients (auxiliary scalars excluded).
    fn num_params(&self) -> usize;

    /// Number of observations in the training data.
    fn num_obs(&self) -> usize;

    /// Column indices (into `dataset()`) of the predictors, in coefficient
    /// order.
    fn predictor_positions(&self) -> &[usize];

    /// All columns of the training data, in the order `predictor_positions`
    /// indexes into.
    fn dataset(&self) -> &[Array1<f64>];

    /// Log-likelihood at `param`.
    ///
    /// `exact = false` may drop terms that do not depend on `param`
    /// (optimizer inner loops); `exact = true` includes all normalizing
    /// constants (reporting).
    fn log_likelihood(&self, param: &Self::Param, exact: bool) -> ModelResult<f64>;

    /// Gradient of the log-likelihood at `param`, written into `out`
    /// (length `num_params()`).
    fn score(&self, param: &Self::Param, out: &mut Array1<f64>) -> ModelResult<()>;

    /// Hessian of the log-likelihood at `param`, written into `out`
    /// (`num_params() × num_params()`).
    fn hessian(
        &self, param: &Self::Param, kind: HessianKind, out: &mut Array2<f64>,
    ) -> ModelResult<()>;
}
