//! summary — printable text summaries of fitted results.
//!
//! Purpose
//! -------
//! Render coefficient-level statistics as fixed-width text. [`SummaryTable`]
//! is a family-agnostic layout engine over named, caller-formatted columns;
//! [`summarize`] fills one in from any
//! [`FittedResults`](crate::inference::FittedResults).
//!
//! Key behaviors
//! -------------
//! - Formatting lives in [`Formatter`] closures ([`numeric`], [`text`], or
//!   caller-supplied), layout in [`SummaryTable::render`].
//! - Unavailable statistics render as [`NA_MARKER`], never as zeros.
//! - Layout problems are reported as [`SummaryError`].
//!
//! Downstream usage
//! ----------------
//! - `summarize(&results, &SummaryOptions::default())?.render()?` for the
//!   standard table; build a [`SummaryTable`] directly for custom reports.

pub mod errors;
pub mod format;
pub mod report;
pub mod table;

// ---- Re-exports (primary surface) -----------------------------------------

pub use self::errors::{SummaryError, SummaryResult};
pub use self::format::{ColumnValues, Formatter, NA_MARKER, numeric, text};
pub use self::report::{SummaryOptions, summarize};
pub use self::table::{DEFAULT_GAP, SummaryTable};
