//! data — columnar datasets consumed by regression models.
//!
//! Purpose
//! -------
//! Define the data contract every model family is built on: named numeric
//! columns of equal length plus a response variable and an ordered list of
//! predictors. Structural problems are reported at construction as
//! [`DataError`] values, before any model sees the data.
//!
//! Downstream usage
//! ----------------
//! - Build a [`ColumnDataset`] (directly or from a [`Columns`] provider),
//!   wrap it in an `Arc` if several models share it, and hand it to a concrete
//!   model implementing `model::RegFitter`.

pub mod dataset;
pub mod errors;

// ---- Re-exports (primary surface) -----------------------------------------

pub use self::dataset::{ColumnDataset, Columns, Dataset};
pub use self::errors::{DataError, DataResult};
