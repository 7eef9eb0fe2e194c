//! inference — covariance estimation and fitted-model results.
//!
//! Purpose
//! -------
//! Turn a fitted [`RegFitter`](crate::model::RegFitter) and its point
//! estimates into inferential statistics without knowing anything about the
//! model family: the covariance of the estimates from the expected
//! information, then standard errors, z-scores, two-sided p-values, and
//! confidence intervals derived from it.
//!
//! Key behaviors
//! -------------
//! - [`estimate_covariance`] evaluates the expected Hessian at `β̂` and
//!   returns `Σ = (−H)⁻¹`; [`invert_hessian`] is the same step for a Hessian
//!   already in hand. Tolerance is configured via [`CovarianceOptions`].
//! - [`Results`] bundles model, log-likelihood, estimates, names, and
//!   optional covariance; derived statistics are computed lazily and cached.
//! - [`FittedResults`] is the read-only view the summary layer consumes.
//! - `normal` holds the normal-theory helpers used for p-values and
//!   interval quantiles.
//!
//! Invariants & assumptions
//! ------------------------
//! - The expected Hessian at `β̂` is symmetric negative definite for a
//!   well-posed fit; anything with reciprocal condition number below the
//!   configured tolerance is reported as [`InferenceError::NotInvertible`].
//! - A missing covariance never fabricates zeros: every statistic derived
//!   from it is `None`.
//! - Covariance and parameter vectors share the model's coefficient order.
//!
//! Conventions
//! -----------
//! - Failures are reported through [`InferenceResult`]; recoverable
//!   numerical trouble is logged with the `log` facade at `warn` level,
//!   routine progress at `debug` level.
//! - No global state and no `unsafe` code paths.
//!
//! Downstream usage
//! ----------------
//! - After fitting, call [`Results::from_fit`] with the model in an `Arc`,
//!   the fitted parameter, and coefficient names; pass the results to
//!   `summary::summarize` for a printable table.
//! - `use rust_statmodel::inference::prelude::*;` imports the primary
//!   surface in one line.
//!
//! Testing notes
//! -------------
//! - Unit tests in each submodule cover analytic inverses, singular and
//!   ill-conditioned Hessians, the statistics identities, caching, and
//!   absence propagation.
//! - Integration tests under `tests/` run the full pipeline on Poisson and
//!   Gaussian fixtures.

pub mod covariance;
pub mod errors;
pub mod normal;
pub mod results;

// ---- Re-exports (primary surface) -----------------------------------------

pub use self::covariance::{
    CovarianceOptions, DEFAULT_RCOND_TOL, estimate_covariance, invert_hessian,
};
pub use self::errors::{InferenceError, InferenceResult};
pub use self::normal::{normal_cdf, normal_quantile, two_sided_p_value};
pub use self::results::{FittedResults, Results};

// ---- Optional convenience prelude for downstream crates ------------------

pub mod prelude {
    pub use super::covariance::{CovarianceOptions, estimate_covariance};
    pub use super::errors::{InferenceError, InferenceResult};
    pub use super::results::{FittedResults, Results};
}
