//! inference::results — fitted-model results with lazily derived statistics.
//!
//! Purpose
//! -------
//! Hold a completed fit (model, maximized log-likelihood, point estimates,
//! coefficient names, optional covariance) and derive standard errors,
//! z-scores, p-values, confidence intervals, and fitted values on demand.
//!
//! Key behaviors
//! -------------
//! - [`Results::new`] validates every length/shape against the model and
//!   returns an [`InferenceError`] instead of panicking.
//! - [`Results::from_fit`] evaluates the exact log-likelihood and the
//!   covariance at a fitted parameter; a non-invertible information matrix
//!   yields results without covariance rather than an error.
//! - `std_err`, `z_scores`, and `p_values` are computed at most once and
//!   cached in `OnceLock`s; repeated calls return the same vector.
//! - [`FittedResults`] is the family-agnostic view consumed by the summary
//!   builder.
//!
//! Invariants & assumptions
//! ------------------------
//! - `params.len() == names.len() == model.num_params()`; when present,
//!   `vcov` is `p × p` in coefficient order.
//! - Without covariance, every derived statistic is `None`, never zeros.
//! - Negative-variance policy: if any diagonal entry of `vcov` is negative
//!   or non-finite, standard errors are `None` (and so are z-scores,
//!   p-values, and intervals). A `warn` log names the offending entry. Zero
//!   variances are kept; they produce infinite or NaN z-scores.
//! - Caches are filled in dependency order: `p_values` pulls `z_scores`,
//!   which pulls `std_err`.
//!
//! Conventions
//! -----------
//! - The model is shared through an `Arc`; several results objects and
//!   diagnostics may hold the same model.
//! - Results are `Sync` whenever the model is: concurrent first calls
//!   to a cached accessor block on the same `OnceLock` and compute once.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the statistics identities, idempotence, absence
//!   propagation, the negative-variance policy, construction checks, fitted
//!   values, and confidence intervals.
use crate::inference::{
    covariance::{CovarianceOptions, estimate_covariance},
    errors::{InferenceError, InferenceResult},
    normal::{normal_quantile, two_sided_p_value},
};
use crate::model::{Parameter, RegFitter, linear_predictor};
use ndarray::{Array1, Array2};
use std::sync::{Arc, OnceLock};

/// Family-agnostic read access to a fitted model's estimates and statistics.
pub trait FittedResults {
    /// Coefficient labels, aligned with `params` and the rows of `vcov`.
    fn names(&self) -> &[String];

    /// Maximized log-likelihood.
    fn log_likelihood(&self) -> f64;

    /// Point estimates.
    fn params(&self) -> &Array1<f64>;

    /// Covariance of the estimates, if it could be computed.
    fn vcov(&self) -> Option<&Array2<f64>>;

    fn std_err(&self) -> Option<&Array1<f64>>;

    fn z_scores(&self) -> Option<&Array1<f64>>;

    fn p_values(&self) -> Option<&Array1<f64>>;

    /// Number of observations the model was fit to.
    fn num_obs(&self) -> usize;

    /// Normal-theory confidence intervals `β̂ ± z_{(1+level)/2} · se`.
    ///
    /// Returns a `p × 2` matrix of `[lower, upper]` rows, or `None` when
    /// standard errors are unavailable.
    ///
    /// # Errors
    /// - [`InferenceError::InvalidConfidenceLevel`] unless `0 < level < 1`.
    fn conf_int(&self, level: f64) -> InferenceResult<Option<Array2<f64>>> {
        if !(level > 0.0 && level < 1.0) {
            return Err(InferenceError::InvalidConfidenceLevel { level });
        }
        let Some(se) = self.std_err() else {
            return Ok(None);
        };
        let q = normal_quantile(0.5 + level / 2.0);
        let params = self.params();
        Ok(Some(Array2::from_shape_fn((params.len(), 2), |(i, j)| {
            if j == 0 { params[i] - q * se[i] } else { params[i] + q * se[i] }
        })))
    }
}

/// `Results` — a completed fit plus cached inferential statistics.
///
/// Fields
/// ------
/// - `model`: `Arc<M>`
///   Model the estimates belong to; shared, not owned exclusively.
/// - `log_likelihood`: `f64`
///   Maximized log-likelihood (exact evaluation when built via `from_fit`).
/// - `params`: `Array1<f64>`
///   Point estimates, length `p`.
/// - `names`: `Vec<String>`
///   Coefficient labels, length `p`.
/// - `vcov`: `Option<Array2<f64>>`
///   `p × p` covariance, or `None` when inversion failed or was skipped.
/// - `std_err`, `z_scores`, `p_values`: `OnceLock<Option<Array1<f64>>>`
///   Derived caches, populated on first access and never invalidated.
#[derive(Debug, Clone)]
pub struct Results<M: RegFitter> {
    model: Arc<M>,
    log_likelihood: f64,
    params: Array1<f64>,
    names: Vec<String>,
    vcov: Option<Array2<f64>>,
    std_err: OnceLock<Option<Array1<f64>>>,
    z_scores: OnceLock<Option<Array1<f64>>>,
    p_values: OnceLock<Option<Array1<f64>>>,
}

impl<M: RegFitter> Results<M> {
    /// Construct results from already computed pieces.
    ///
    /// Parameters
    /// ----------
    /// - `model`: `Arc<M>`
    ///   Fitted model.
    /// - `log_likelihood`: `f64`
    ///   Maximized log-likelihood.
    /// - `params`: `Array1<f64>`
    ///   Point estimates; length must equal `model.num_params()`.
    /// - `names`: `Vec<String>`
    ///   Coefficient labels; same length as `params`.
    /// - `vcov`: `Option<Array2<f64>>`
    ///   Covariance of the estimates, `p × p`, or `None`.
    ///
    /// Errors
    /// ------
    /// - `InferenceError::ParamsLengthMismatch`
    /// - `InferenceError::NamesLengthMismatch`
    /// - `InferenceError::CovarianceShapeMismatch`
    pub fn new(
        model: Arc<M>, log_likelihood: f64, params: Array1<f64>, names: Vec<String>,
        vcov: Option<Array2<f64>>,
    ) -> InferenceResult<Self> {
        let p = model.num_params();
        if params.len() != p {
            return Err(InferenceError::ParamsLengthMismatch { expected: p, found: params.len() });
        }
        if names.len() != p {
            return Err(InferenceError::NamesLengthMismatch { expected: p, found: names.len() });
        }
        if let Some(v) = &vcov {
            if v.dim() != (p, p) {
                return Err(InferenceError::CovarianceShapeMismatch { expected: p, found: v.dim() });
            }
        }
        Ok(Self {
            model,
            log_likelihood,
            params,
            names,
            vcov,
            std_err: OnceLock::new(),
            z_scores: OnceLock::new(),
            p_values: OnceLock::new(),
        })
    }

    /// from_fit — assemble results at a fitted parameter.
    ///
    /// Evaluates `log_likelihood(param, exact = true)`, copies the
    /// coefficients, and estimates the covariance from the expected Hessian.
    ///
    /// Errors
    /// ------
    /// - Any model or construction error. `InferenceError::NotInvertible` is
    ///   NOT an error here: it produces results with `vcov() == None`.
    pub fn from_fit(
        model: Arc<M>, param: &M::Param, names: Vec<String>, opts: &CovarianceOptions,
    ) -> InferenceResult<Self> {
        let log_likelihood = model.log_likelihood(param, true)?;
        let vcov = match estimate_covariance(model.as_ref(), param, opts) {
            Ok(cov) => Some(cov),
            Err(InferenceError::NotInvertible { rcond }) => {
                log::warn!(
                    "Covariance unavailable (rcond = {rcond:e}); inferential statistics will be absent"
                );
                None
            }
            Err(err) => return Err(err),
        };
        Self::new(model, log_likelihood, param.coefficients().clone(), names, vcov)
    }

    pub fn model(&self) -> &Arc<M> {
        &self.model
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn log_likelihood(&self) -> f64 {
        self.log_likelihood
    }

    pub fn params(&self) -> &Array1<f64> {
        &self.params
    }

    /// Covariance of the estimates in standard (row-major) layout.
    pub fn vcov(&self) -> Option<&Array2<f64>> {
        self.vcov.as_ref()
    }

    pub fn num_obs(&self) -> usize {
        self.model.num_obs()
    }

    /// Fitted linear predictor `η = Σ_k β̂_k · x_{pos_k}`.
    ///
    /// With `data = None` the model's training columns are used. Supplied
    /// data must have the same column layout as the training data (same
    /// count, same meaning per index); its row count may differ.
    ///
    /// Only the column count is checked. Columns are matched by index, since
    /// the model keeps predictor positions and not variable names, so
    /// keeping each column in its training slot is the caller's
    /// responsibility. Build prediction data from a dataset with the
    /// training `var_names` order to get that for free.
    ///
    /// # Errors
    /// - [`InferenceError::ColumnCountMismatch`] if the column counts differ.
    /// - [`InferenceError::Model`] if the selected columns differ in length.
    pub fn fitted_values(&self, data: Option<&[Array1<f64>]>) -> InferenceResult<Array1<f64>> {
        let training = self.model.dataset();
        let data = data.unwrap_or(training);
        if data.len() != training.len() {
            return Err(InferenceError::ColumnCountMismatch {
                expected: training.len(),
                found: data.len(),
            });
        }
        Ok(linear_predictor(data, self.model.predictor_positions(), &self.params)?)
    }

    /// Standard errors `sqrt(diag(vcov))`, cached after the first call.
    pub fn std_err(&self) -> Option<&Array1<f64>> {
        self.std_err.get_or_init(|| self.compute_std_err()).as_ref()
    }

    /// Z-scores `β̂ / se`, cached after the first call.
    pub fn z_scores(&self) -> Option<&Array1<f64>> {
        self.z_scores
            .get_or_init(|| self.std_err().map(|se| &self.params / se))
            .as_ref()
    }

    /// Two-sided normal p-values `2·Φ(−|z|)`, cached after the first call.
    pub fn p_values(&self) -> Option<&Array1<f64>> {
        self.p_values
            .get_or_init(|| self.z_scores().map(|z| z.mapv(two_sided_p_value)))
            .as_ref()
    }

    /// See [`FittedResults::conf_int`].
    pub fn conf_int(&self, level: f64) -> InferenceResult<Option<Array2<f64>>> {
        FittedResults::conf_int(self, level)
    }

    fn compute_std_err(&self) -> Option<Array1<f64>> {
        let vcov = self.vcov.as_ref()?;
        let diag = vcov.diag();
        if let Some((i, &v)) = diag.indexed_iter().find(|(_, v)| !v.is_finite() || **v < 0.0) {
            log::warn!(
                "Covariance diagonal entry {i} ({}) is {v}; standard errors are unavailable",
                self.names[i]
            );
            return None;
        }
        log::debug!("Computed standard errors for {} parameters", diag.len());
        Some(diag.mapv(f64::sqrt))
    }
}

impl<M: RegFitter> FittedResults for Results<M> {
    fn names(&self) -> &[String] {
        Results::names(self)
    }

    fn log_likelihood(&self) -> f64 {
        Results::log_likelihood(self)
    }

    fn params(&self) -> &Array1<f64> {
        Results::params(self)
    }

    fn vcov(&self) -> Option<&Array2<f64>> {
        Results::vcov(self)
    }

    fn std_err(&self) -> Option<&Array1<f64>> {
        Results::std_err(self)
    }

    fn z_scores(&self) -> Option<&Array1<f64>> {
        Results::z_scores(self)
    }

    fn p_values(&self) -> Option<&Array1<f64>> {
        Results::p_values(self)
    }

    fn num_obs(&self) -> usize {
        Results::num_obs(self)
    }
}
