//! model::params — parameter containers handed to `RegFitter` methods.
//!
//! Purpose
//! -------
//! Separate "what a model is evaluated at" from the model itself. A parameter
//! always carries the linear-predictor coefficients; families with extra
//! structure (a dispersion or shape scalar) carry it alongside, where the
//! model's likelihood and Hessian code can read it but the inference layer
//! never counts it as a coefficient.
//!
//! Key behaviors
//! -------------
//! - [`Parameter`] is the trait every parameter type implements. `Clone` is
//!   a deep copy, so optimizers can branch candidate vectors without
//!   aliasing.
//! - [`CoefParams`] holds coefficients only.
//! - [`DispersionParams`] adds one strictly positive, finite auxiliary
//!   scalar, validated at construction.
//!
//! Invariants & assumptions
//! ------------------------
//! - `coefficients().len() == model.num_params()` whenever a parameter is
//!   passed into a `RegFitter` method. This is a model-level contract; the
//!   parameter types do not know the model and do not enforce it.
use crate::model::errors::{ModelError, ModelResult};
use ndarray::Array1;

/// Coefficient container shared by all model families.
pub trait Parameter: Clone + std::fmt::Debug {
    /// Coefficients of the covariates in the linear predictor.
    fn coefficients(&self) -> &Array1<f64>;

    /// Mutable view of the coefficients; writes change the parameter itself.
    fn coefficients_mut(&mut self) -> &mut Array1<f64>;

    /// Replace the coefficients wholesale.
    fn set_coefficients(&mut self, coefficients: Array1<f64>) {
        *self.coefficients_mut() = coefficients;
    }

    fn num_coefficients(&self) -> usize {
        self.coefficients().len()
    }
}

/// Coefficients only.
#[derive(Debug, Clone, PartialEq)]
pub struct CoefParams {
    pub coefficients: Array1<f64>,
}

impl CoefParams {
    pub fn new(coefficients: Array1<f64>) -> Self {
        Self { coefficients }
    }

    /// All-zero coefficients of length `p`.
    pub fn zeros(p: usize) -> Self {
        Self { coefficients: Array1::zeros(p) }
    }
}

impl Parameter for CoefParams {
    fn coefficients(&self) -> &Array1<f64> {
        &self.coefficients
    }

    fn coefficients_mut(&mut self) -> &mut Array1<f64> {
        &mut self.coefficients
    }
}

/// `DispersionParams` — coefficients plus a positive auxiliary scalar.
///
/// Purpose
/// -------
/// Parameterize families whose likelihood depends on a scale-like quantity
/// that is held fixed while coefficients are estimated (Gaussian variance,
/// negative-binomial dispersion, gamma shape, ...).
///
/// Fields
/// ------
/// - `coefficients`: `Array1<f64>`
///   Linear-predictor coefficients; the only part counted by `num_params`.
/// - `dispersion`: `f64`
///   Auxiliary scalar; private so it stays finite and `> 0`.
///
/// Notes
/// -----
/// - The inference layer never reads `dispersion`. It reaches the covariance
///   only through the model's Hessian.
#[derive(Debug, Clone, PartialEq)]
pub struct DispersionParams {
    pub coefficients: Array1<f64>,
    dispersion: f64,
}

impl DispersionParams {
    /// Construct validated parameters.
    ///
    /// # Errors
    /// - [`ModelError::InvalidAuxiliary`] if `dispersion` is non-finite or
    ///   not strictly positive.
    pub fn new(coefficients: Array1<f64>, dispersion: f64) -> ModelResult<Self> {
        validate_dispersion(dispersion)?;
        Ok(Self { coefficients, dispersion })
    }

    pub fn dispersion(&self) -> f64 {
        self.dispersion
    }

    /// Replace the auxiliary scalar, keeping the coefficients.
    ///
    /// # Errors
    /// - [`ModelError::InvalidAuxiliary`] under the same rules as [`DispersionParams::new`];
    ///   the stored value is left unchanged on error.
    pub fn set_dispersion(&mut self, dispersion: f64) -> ModelResult<()> {
        validate_dispersion(dispersion)?;
        self.dispersion = dispersion;
        Ok(())
    }
}

impl Parameter for DispersionParams {
    fn coefficients(&self) -> &Array1<f64> {
        &self.coefficients
    }

    fn coefficients_mut(&mut self) -> &mut Array1<f64> {
        &mut self.coefficients
    }
}

fn validate_dispersion(value: f64) -> ModelResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ModelError::InvalidAuxiliary {
            name: "dispersion",
            value,
            reason: "Dispersion must be finite and strictly positive.",
        });
    }
    Ok(())
}
