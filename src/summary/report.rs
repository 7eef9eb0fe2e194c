//! summary::report — the standard coefficient table for fitted results.
//!
//! Purpose
//! -------
//! Turn any [`FittedResults`] into a [`SummaryTable`]: one row per
//! coefficient with its estimate, standard error, z-score, two-sided p-value,
//! and normal-theory confidence bounds, plus a metadata block describing the
//! fit.
//!
//! Key behaviors
//! -------------
//! - Columns: `Variable`, `Parameter`, `SE`, `Z`, `P>|z|`, and the lower and
//!   upper interval bounds labelled by tail probability (`[0.025`, `0.975]`
//!   at the default 95% level).
//! - Metadata: log-likelihood, number of observations, number of
//!   parameters, and whether a covariance estimate is available.
//! - When standard errors are unavailable every inferential cell renders as
//!   the `NA` marker and a trailing message says why; point estimates still
//!   render.
//!
//! Conventions
//! -----------
//! - [`summarize`] returns the table unrendered so callers can append
//!   messages before calling `render`.
use crate::inference::{FittedResults, InferenceError};
use crate::summary::{
    errors::{SummaryError, SummaryResult},
    format::{ColumnValues, numeric, text},
    table::{DEFAULT_GAP, SummaryTable},
};

/// Layout and content options for [`summarize`].
///
/// - `title`: text centered above the table.
/// - `gap`: blanks between paired metadata entries.
/// - `width`: minimum cell width for every column.
/// - `precision`: decimals for numeric cells and the log-likelihood.
/// - `conf_level`: coverage of the confidence bounds, in `(0, 1)`.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryOptions {
    pub title: String,
    pub gap: usize,
    pub width: usize,
    pub precision: usize,
    pub conf_level: f64,
}

impl SummaryOptions {
    /// Construct validated options.
    ///
    /// # Errors
    /// - [`SummaryError::InvalidWidth`] if `width == 0`.
    /// - [`SummaryError::InvalidConfidenceLevel`] unless `0 < conf_level < 1`.
    pub fn new(
        title: impl Into<String>, gap: usize, width: usize, precision: usize, conf_level: f64,
    ) -> SummaryResult<Self> {
        if width == 0 {
            return Err(SummaryError::InvalidWidth { width });
        }
        if !(conf_level > 0.0 && conf_level < 1.0) {
            return Err(SummaryError::InvalidConfidenceLevel { level: conf_level });
        }
        Ok(Self { title: title.into(), gap, width, precision, conf_level })
    }
}

impl Default for SummaryOptions {
    /// "Regression results", gap 10, width 10, 4 decimals, 95% intervals.
    fn default() -> Self {
        Self {
            title: "Regression results".to_string(),
            gap: DEFAULT_GAP,
            width: 10,
            precision: 4,
            conf_level: 0.95,
        }
    }
}

/// summarize — build the standard coefficient table.
///
/// Parameters
/// ----------
/// - `results`: `&R` where `R: FittedResults`
///   Fitted results; only their public accessors are used.
/// - `opts`: `&SummaryOptions`
///   Title, spacing, precision, and interval level.
///
/// Returns
/// -------
/// `SummaryResult<SummaryTable>`
///   Unrendered table; call `render()` for text.
///
/// Errors
/// ------
/// - `SummaryError::InvalidConfidenceLevel` for a level outside `(0, 1)`
///   (the results layer rejects it; the error is re-labelled here).
/// - `SummaryError::Inference` for any other results-layer failure.
pub fn summarize<R: FittedResults + ?Sized>(
    results: &R, opts: &SummaryOptions,
) -> SummaryResult<SummaryTable> {
    let p = results.params().len();
    let (w, prec) = (opts.width, opts.precision);

    let ci = results.conf_int(opts.conf_level).map_err(|err| match err {
        InferenceError::InvalidConfidenceLevel { level } => {
            SummaryError::InvalidConfidenceLevel { level }
        }
        other => SummaryError::Inference(other),
    })?;
    let (lower, upper) = match ci {
        Some(ci) => (Some(ci.column(0).to_owned()), Some(ci.column(1).to_owned())),
        None => (None, None),
    };
    let tail = (1.0 - opts.conf_level) / 2.0;

    let covariance = if results.vcov().is_some() { "expected information" } else { "unavailable" };

    let mut table = SummaryTable::new(opts.title.clone())
        .gap(opts.gap)
        .top(format!("Log-likelihood: {:.prec$}", results.log_likelihood()))
        .top(format!("Observations: {}", results.num_obs()))
        .top(format!("Parameters: {p}"))
        .top(format!("Covariance: {covariance}"))
        .column("Variable", results.names().to_vec(), text(w))
        .column("Parameter", results.params(), numeric(w, prec))
        .column("SE", ColumnValues::from_optional(results.std_err(), p), numeric(w, prec))
        .column("Z", ColumnValues::from_optional(results.z_scores(), p), numeric(w, prec))
        .column("P>|z|", ColumnValues::from_optional(results.p_values(), p), numeric(w, prec))
        .column(
            format!("[{tail:.3}"),
            ColumnValues::from_optional(lower.as_ref(), p),
            numeric(w, prec),
        )
        .column(
            format!("{:.3}]", 1.0 - tail),
            ColumnValues::from_optional(upper.as_ref(), p),
            numeric(w, prec),
        );

    if results.vcov().is_none() {
        table = table.message(
            "Standard errors are not available: the expected information matrix is not invertible.",
        );
    } else if results.std_err().is_none() {
        table = table.message(
            "Standard errors are not available: the covariance matrix has a negative or non-finite variance.",
        );
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inference::Results;
    use crate::model::fixtures::{FixedHessianModel, PoissonModel, poisson_dataset};
    use ndarray::{Array2, array};
    use std::sync::Arc;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - The standard header, metadata, and one row per coefficient.
    // - NA rendering and the explanatory message without covariance.
    // - Option validation.
    // -------------------------------------------------------------------------

    fn names() -> Vec<String> {
        vec!["icept".to_string(), "x".to_string()]
    }

    #[test]
    // Purpose
    // -------
    // Verify the standard table on results with covariance.
    //
    // Given
    // -----
    // - Poisson results with β̂ = [0.5, -0.25] and an invertible covariance.
    //
    // Expect
    // ------
    // - Header lists every column, interval labels match 95%, each
    //   coefficient has a row, no NA markers, no trailing message.
    fn summarize_renders_full_table() {
        // Arrange
        let model = Arc::new(PoissonModel::new(poisson_dataset()).unwrap());
        let vcov = array![[86.0, -10.0], [-10.0, 7.0]] / 502.0;
        let res = Results::new(model, -9.0, array![0.5, -0.25], names(), Some(vcov)).unwrap();

        // Act
        let table = summarize(&res, &SummaryOptions::default()).unwrap();
        let out = table.render().unwrap();

        // Assert
        let header = out.lines().find(|l| l.contains("Variable")).unwrap();
        for col in ["Parameter", "SE", "Z", "P>|z|", "[0.025", "0.975]"] {
            assert!(header.contains(col), "missing column {col} in {header}");
        }
        assert!(out.contains("Log-likelihood: -9.0000"));
        assert!(out.contains("Observations: 7"));
        assert!(out.contains("Covariance: expected information"));
        assert!(out.lines().any(|l| l.trim_start().starts_with("icept") && l.contains("0.5000")));
        assert!(out.lines().any(|l| l.trim_start().starts_with("x") && l.contains("-0.2500")));
        assert!(!out.contains("NA"));
        assert!(table.messages().is_empty());
        assert!(out.ends_with("-\n"));
    }

    #[test]
    // Purpose
    // -------
    // Ensure a fit without covariance still renders estimates, marks every
    // inferential cell as NA, and explains why.
    fn summarize_marks_unavailable_inference() {
        let model = Arc::new(FixedHessianModel::new(Array2::zeros((2, 2))));
        let res = Results::new(model, 0.0, array![1.0, 2.0], names(), None).unwrap();

        let out = summarize(&res, &SummaryOptions::default()).unwrap().render().unwrap();

        let icept_row = out.lines().find(|l| l.trim_start().starts_with("icept")).unwrap();
        assert!(icept_row.contains("1.0000"));
        assert_eq!(icept_row.matches("NA").count(), 5);
        assert!(out.contains("Covariance: unavailable"));
        assert!(out.trim_end().ends_with("not invertible."));
    }

    #[test]
    fn summarize_explains_negative_variance() {
        let model = Arc::new(PoissonModel::new(poisson_dataset()).unwrap());
        let vcov = array![[0.1, 0.0], [0.0, -0.1]];
        let res = Results::new(model, -9.0, array![0.5, -0.25], names(), Some(vcov)).unwrap();

        let table = summarize(&res, &SummaryOptions::default()).unwrap();
        assert_eq!(table.messages().len(), 1);
        assert!(table.messages()[0].contains("negative or non-finite variance"));
    }

    #[test]
    // Purpose
    // -------
    // Ensure zero variances keep their statistics but a NaN z-score (zero
    // estimate over zero standard error) is shown as NA, never as "NaN".
    //
    // Given
    // -----
    // - β̂ = [0.5, 0.0] and Σ = 0.
    //
    // Expect
    // ------
    // - The x row shows NA for Z and P>|z| only; the icept row has none.
    // - No "NaN" text anywhere and no trailing message.
    fn summarize_marks_nan_statistics_as_na() {
        // Arrange
        let model = Arc::new(PoissonModel::new(poisson_dataset()).unwrap());
        let res =
            Results::new(model, -9.0, array![0.5, 0.0], names(), Some(Array2::zeros((2, 2))))
                .unwrap();

        // Act
        let table = summarize(&res, &SummaryOptions::default()).unwrap();
        let out = table.render().unwrap();

        // Assert
        let x_row = out.lines().find(|l| l.trim_start().starts_with("x ")).unwrap();
        let icept_row = out.lines().find(|l| l.trim_start().starts_with("icept")).unwrap();
        assert_eq!(x_row.matches("NA").count(), 2);
        assert_eq!(icept_row.matches("NA").count(), 0);
        assert!(!out.contains("NaN"));
        assert!(table.messages().is_empty());
        assert_eq!(table.title(), "Regression results");
    }

    #[test]
    fn options_are_validated() {
        assert_eq!(
            SummaryOptions::new("t", 2, 0, 3, 0.9),
            Err(SummaryError::InvalidWidth { width: 0 })
        );
        assert_eq!(
            SummaryOptions::new("t", 2, 8, 3, 1.0),
            Err(SummaryError::InvalidConfidenceLevel { level: 1.0 })
        );
        let opts = SummaryOptions::new("t", 2, 8, 3, 0.9).unwrap();
        assert_eq!(opts.precision, 3);
    }

    #[test]
    fn interval_labels_follow_level() {
        let model = Arc::new(PoissonModel::new(poisson_dataset()).unwrap());
        let res = Results::new(model, -9.0, array![0.5, -0.25], names(), None).unwrap();
        let opts = SummaryOptions { conf_level: 0.9, ..SummaryOptions::default() };

        let out = summarize(&res, &opts).unwrap().render().unwrap();
        assert!(out.contains("[0.050"));
        assert!(out.contains("0.950]"));
    }
}
