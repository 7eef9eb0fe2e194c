//! data::dataset — columnar data holder with response/predictor roles.
//!
//! Purpose
//! -------
//! Give statistical models a single, read-only view of their data: an ordered
//! list of named numeric columns of equal length, together with the name of
//! the response variable and the ordered names of the predictors.
//!
//! Key behaviors
//! -------------
//! - [`Dataset`] is the object-safe contract models consume. Only the four
//!   accessors are required; lookups by name and predictor positions are
//!   provided on top of them.
//! - [`ColumnDataset`] is the default implementation. All structural checks
//!   happen once in [`ColumnDataset::new`].
//! - [`Columns`] describes any external column provider (a data frame, a
//!   parsed file) so it can be turned into a dataset with
//!   [`ColumnDataset::from_columns`].
//!
//! Invariants & assumptions
//! ------------------------
//! - `columns().len() == var_names().len()` and every column has the same
//!   length `n`.
//! - Variable names are unique.
//! - The response name and every predictor name appear among the variable
//!   names.
//!
//! Conventions
//! -----------
//! - A dataset is immutable after construction. Models share it read-only,
//!   typically behind an `Arc`.
//! - Predictor positions are indices into `columns()`, in the order given by
//!   `predictor_names()`.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the happy path and each construction failure, plus the
//!   provided lookup methods.
use crate::data::errors::{DataError, DataResult};
use ndarray::Array1;
use std::collections::HashSet;

/// Read-only columnar data with designated response and predictor roles.
pub trait Dataset {
    /// All variables, stored column-wise, in the same order as `var_names`.
    fn columns(&self) -> &[Array1<f64>];

    /// Names of the variables, aligned with `columns`.
    fn var_names(&self) -> &[String];

    /// Name of the dependent variable.
    fn response_name(&self) -> &str;

    /// Names of the independent variables, in linear-predictor order.
    fn predictor_names(&self) -> &[String];

    /// Number of observations (common column length); `0` for no columns.
    fn num_obs(&self) -> usize {
        self.columns().first().map_or(0, |c| c.len())
    }

    /// Index of the variable called `name`, if any.
    fn position(&self, name: &str) -> Option<usize> {
        self.var_names().iter().position(|v| v == name)
    }

    /// Column of the variable called `name`, if any.
    fn column(&self, name: &str) -> Option<&Array1<f64>> {
        self.position(name).map(|j| &self.columns()[j])
    }

    /// Response column.
    ///
    /// # Errors
    /// - [`DataError::UnknownResponse`] if the response name is not a variable.
    fn response(&self) -> DataResult<&Array1<f64>> {
        self.column(self.response_name())
            .ok_or_else(|| DataError::UnknownResponse { name: self.response_name().to_string() })
    }

    /// Column indices of the predictors, in `predictor_names` order.
    ///
    /// # Errors
    /// - [`DataError::UnknownPredictor`] for the first predictor name that is
    ///   not a variable.
    fn predictor_positions(&self) -> DataResult<Vec<usize>> {
        self.predictor_names()
            .iter()
            .map(|name| {
                self.position(name).ok_or_else(|| DataError::UnknownPredictor { name: name.clone() })
            })
            .collect()
    }
}

/// Any source of named columns that can seed a [`ColumnDataset`].
pub trait Columns {
    fn names(&self) -> Vec<String>;
    fn data(&self) -> Vec<Array1<f64>>;
}

/// `ColumnDataset` — validated, owned implementation of [`Dataset`].
///
/// Fields
/// ------
/// - `columns`: `Vec<Array1<f64>>`
///   Variables stored column-wise, all of the same length.
/// - `var_names`: `Vec<String>`
///   Unique names aligned with `columns`.
/// - `response_name`: `String`
///   Name of the dependent variable; one of `var_names`.
/// - `predictor_names`: `Vec<String>`
///   Ordered subset of `var_names` forming the linear predictor.
///
/// Invariants
/// ----------
/// - Established by [`ColumnDataset::new`] and never changed afterwards;
///   fields are private so the invariants cannot be broken by callers.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDataset {
    columns: Vec<Array1<f64>>,
    var_names: Vec<String>,
    response_name: String,
    predictor_names: Vec<String>,
}

impl ColumnDataset {
    /// Construct a validated dataset.
    ///
    /// Parameters
    /// ----------
    /// - `columns`: `Vec<Array1<f64>>`
    ///   Variables stored column-wise. Must be non-empty and of equal length.
    /// - `var_names`: `Vec<String>`
    ///   One unique name per column.
    /// - `response_name`: `&str`
    ///   Name of the dependent variable.
    /// - `predictor_names`: `Vec<String>`
    ///   Names of the independent variables, in linear-predictor order.
    ///
    /// Errors
    /// ------
    /// - `DataError::EmptyDataset` when `columns` is empty.
    /// - `DataError::NamesLengthMismatch` when names and columns disagree in
    ///   count.
    /// - `DataError::ColumnLengthMismatch` for the first column whose length
    ///   differs from the first column.
    /// - `DataError::DuplicateVariable` for the first repeated name.
    /// - `DataError::UnknownResponse` / `DataError::UnknownPredictor` when a
    ///   declared role refers to a name that is not a variable.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use ndarray::array;
    /// # use rust_statmodel::data::{ColumnDataset, Dataset};
    /// let ds = ColumnDataset::new(
    ///     vec![array![1.0, 2.0], array![1.0, 1.0], array![0.5, 1.5]],
    ///     vec!["y".into(), "icept".into(), "x".into()],
    ///     "y",
    ///     vec!["icept".into(), "x".into()],
    /// )
    /// .unwrap();
    /// assert_eq!(ds.predictor_positions().unwrap(), vec![1, 2]);
    /// ```
    pub fn new(
        columns: Vec<Array1<f64>>, var_names: Vec<String>, response_name: &str,
        predictor_names: Vec<String>,
    ) -> DataResult<Self> {
        if columns.is_empty() {
            return Err(DataError::EmptyDataset);
        }
        if columns.len() != var_names.len() {
            return Err(DataError::NamesLengthMismatch {
                columns: columns.len(),
                names: var_names.len(),
            });
        }

        let n = columns[0].len();
        for (col, name) in columns.iter().zip(&var_names) {
            if col.len() != n {
                return Err(DataError::ColumnLengthMismatch {
                    name: name.clone(),
                    expected: n,
                    found: col.len(),
                });
            }
        }

        let mut seen = HashSet::with_capacity(var_names.len());
        for name in &var_names {
            if !seen.insert(name.as_str()) {
                return Err(DataError::DuplicateVariable { name: name.clone() });
            }
        }

        if !seen.contains(response_name) {
            return Err(DataError::UnknownResponse { name: response_name.to_string() });
        }
        if let Some(name) = predictor_names.iter().find(|p| !seen.contains(p.as_str())) {
            return Err(DataError::UnknownPredictor { name: name.clone() });
        }

        Ok(ColumnDataset {
            columns,
            var_names,
            response_name: response_name.to_string(),
            predictor_names,
        })
    }

    /// Build a dataset from any [`Columns`] provider; same validation as
    /// [`ColumnDataset::new`].
    pub fn from_columns<C: Columns + ?Sized>(
        source: &C, response_name: &str, predictor_names: Vec<String>,
    ) -> DataResult<Self> {
        ColumnDataset::new(source.data(), source.names(), response_name, predictor_names)
    }
}

impl Dataset for ColumnDataset {
    fn columns(&self) -> &[Array1<f64>] {
        &self.columns
    }

    fn var_names(&self) -> &[String] {
        &self.var_names
    }

    fn response_name(&self) -> &str {
        &self.response_name
    }

    fn predictor_names(&self) -> &[String] {
        &self.predictor_names
    }
}
