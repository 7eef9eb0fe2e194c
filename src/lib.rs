//! rust_statmodel — family-agnostic inference for fitted regression models.
//!
//! Purpose
//! -------
//! Separate how a regression family computes its log-likelihood, score, and
//! Hessian from how fitted estimates become standard errors, z-scores,
//! p-values, and a printable summary. Concrete families implement the model
//! contracts; everything downstream of a fit is shared.
//!
//! Key behaviors
//! -------------
//! - `data`: the columnar [`Dataset`](data::Dataset) contract and
//!   [`ColumnDataset`](data::ColumnDataset), validated at construction.
//! - `model`: the [`Parameter`](model::Parameter) and
//!   [`RegFitter`](model::RegFitter) contracts, buffer and length guards, a
//!   shared linear predictor, and a finite-difference derivative check.
//! - `inference`: covariance from the expected Hessian and the lazily
//!   cached [`Results`](inference::Results) engine.
//! - `summary`: fixed-width text tables over fitted results.
//!
//! Invariants & assumptions
//! ------------------------
//! - Construction-time problems (names, lengths, shapes) surface as typed
//!   errors before any numeric work.
//! - A singular information matrix is not fatal: point estimates and the
//!   log-likelihood stay usable and inferential statistics report absent.
//!
//! Conventions
//! -----------
//! - Vectors and matrices are `ndarray` types at every public boundary.
//! - Each layer has its own error enum and `*Result<T>` alias; lower-layer
//!   errors convert upward via `From`.
//! - Diagnostics go through the `log` facade; the library never installs a
//!   logger.
//!
//! Downstream usage
//! ----------------
//! - Implement [`RegFitter`](model::RegFitter) for a family over a
//!   [`Dataset`](data::Dataset), fit it with any optimizer, then call
//!   [`Results::from_fit`](inference::Results::from_fit) and
//!   [`summarize`](summary::summarize).
//!
//! Testing notes
//! -------------
//! - Unit tests live next to each module; end-to-end tests under `tests/`
//!   use Poisson and Gaussian fixture models.

pub mod data;
pub mod inference;
pub mod model;
pub mod summary;
