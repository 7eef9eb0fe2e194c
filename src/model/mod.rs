//! model — parameter and model contracts for regression families.
//!
//! Purpose
//! -------
//! Define what a concrete model family (Poisson, binomial, gamma, ...) must
//! provide so the inference layer can remain family-agnostic, plus the
//! guards and tools implementers use to honor that contract.
//!
//! Key behaviors
//! -------------
//! - [`Parameter`], with [`CoefParams`] and [`DispersionParams`] as ready-made
//!   implementations.
//! - [`RegFitter`] and [`HessianKind`]: counts, predictor positions,
//!   log-likelihood, score, and observed/expected Hessian.
//! - `validation`: length/shape guards and the shared [`linear_predictor`].
//! - `check`: [`check_derivatives`] compares analytic derivatives with finite
//!   differences.
//!
//! Invariants & assumptions
//! ------------------------
//! - Score and Hessian are written into caller-owned buffers of length `p`
//!   and shape `p × p`; contents are overwritten, never accumulated.
//! - Contract violations surface as [`ModelError`] through [`ModelResult`].
//!
//! Downstream usage
//! ----------------
//! - Concrete families live outside this crate and implement [`RegFitter`]
//!   over a `data::Dataset`.
//! - `inference` consumes any [`RegFitter`] to build covariance matrices and
//!   results.

pub mod check;
pub mod errors;
pub mod fitter;
pub mod params;
pub mod validation;

#[cfg(test)]
pub(crate) mod fixtures;

// ---- Re-exports (primary surface) -----------------------------------------

pub use self::check::{DerivativeCheck, check_derivatives};
pub use self::errors::{ModelError, ModelResult};
pub use self::fitter::{HessianKind, RegFitter};
pub use self::params::{CoefParams, DispersionParams, Parameter};
pub use self::validation::{
    check_coefficients, check_hessian_buffer, check_score_buffer, linear_predictor,
};
