//! Shared model families for integration tests.
//!
//! Purpose
//! -------
//! Provide two small but complete `RegFitter` implementations over any
//! `Dataset`, so the integration tests exercise the crate exactly the way a
//! downstream family crate would:
//! - `Poisson`: log link, coefficients only (`CoefParams`).
//! - `Gaussian`: identity link with a dispersion `σ²` held in
//!   `DispersionParams`; the auxiliary scalar scales the Hessian but is not
//!   itself estimated.
//!
//! Both families have symmetric Hessians and identical observed and
//! expected curvature (canonical links).
#![allow(dead_code)]

use ndarray::{Array1, Array2};
use rust_statmodel::{
    data::{ColumnDataset, Dataset},
    model::{
        CoefParams, DispersionParams, HessianKind, ModelResult, Parameter, RegFitter,
        check_coefficients, check_hessian_buffer, check_score_buffer, linear_predictor,
    },
};
use statrs::function::gamma::ln_gamma;
use std::f64::consts::PI;
use std::sync::Arc;

/// Count data with a mild positive trend in `x`.
pub fn count_data() -> Arc<ColumnDataset> {
    let y = Array1::from(vec![0.0, 1.0, 1.0, 1.0, 2.0, 2.0, 3.0, 4.0]);
    let icept = Array1::<f64>::ones(8);
    let x = Array1::from(vec![-1.5, -1.0, -0.5, 0.0, 0.5, 1.0, 1.5, 2.0]);
    Arc::new(
        ColumnDataset::new(
            vec![y, icept, x],
            vec!["y".into(), "icept".into(), "x".into()],
            "y",
            vec!["icept".into(), "x".into()],
        )
        .expect("count data is well formed"),
    )
}

/// Continuous data; with `collinear = true` a third predictor `x2 = 2·x`
/// makes the design rank deficient.
pub fn continuous_data(collinear: bool) -> Arc<ColumnDataset> {
    let y = Array1::from(vec![1.1, 1.9, 3.2, 3.8, 5.1, 6.2]);
    let icept = Array1::<f64>::ones(6);
    let x = Array1::from(vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
    let x2 = &x * 2.0;
    let mut predictors = vec!["icept".to_string(), "x".to_string()];
    if collinear {
        predictors.push("x2".to_string());
    }
    Arc::new(
        ColumnDataset::new(
            vec![y, icept, x, x2],
            vec!["y".into(), "icept".into(), "x".into(), "x2".into()],
            "y",
            predictors,
        )
        .expect("continuous data is well formed"),
    )
}

/// Poisson regression with log link.
#[derive(Debug)]
pub struct Poisson<D: Dataset> {
    data: Arc<D>,
    positions: Vec<usize>,
    response: usize,
}

impl<D: Dataset> Poisson<D> {
    pub fn new(data: Arc<D>) -> ModelResult<Self> {
        let positions = data.predictor_positions()?;
        let response = data.position(data.response_name()).expect("validated response");
        Ok(Self { data, positions, response })
    }

    fn mean(&self, param: &CoefParams) -> ModelResult<Array1<f64>> {
        check_coefficients(param, self.num_params())?;
        Ok(linear_predictor(self.data.columns(), &self.positions, param.coefficients())?
            .mapv(f64::exp))
    }
}

impl<D: Dataset> RegFitter for Poisson<D> {
    type Param = CoefParams;

    fn num_params(&self) -> usize {
        self.positions.len()
    }

    fn num_obs(&self) -> usize {
        self.data.num_obs()
    }

    fn predictor_positions(&self) -> &[usize] {
        &self.positions
    }

    fn dataset(&self) -> &[Array1<f64>] {
        self.data.columns()
    }

    fn log_likelihood(&self, param: &CoefParams, exact: bool) -> ModelResult<f64> {
        let mu = self.mean(param)?;
        let y = &self.data.columns()[self.response];
        let mut ll: f64 = y.iter().zip(&mu).map(|(&yi, &mi)| yi * mi.ln() - mi).sum();
        if exact {
            ll -= y.iter().map(|&yi| ln_gamma(yi + 1.0)).sum::<f64>();
        }
        Ok(ll)
    }

    fn score(&self, param: &CoefParams, out: &mut Array1<f64>) -> ModelResult<()> {
        check_score_buffer(out, self.num_params())?;
        let resid = &self.data.columns()[self.response] - &self.mean(param)?;
        for (k, &j) in self.positions.iter().enumerate() {
            out[k] = resid.dot(&self.data.columns()[j]);
        }
        Ok(())
    }

    fn hessian(
        &self, param: &CoefParams, _kind: HessianKind, out: &mut Array2<f64>,
    ) -> ModelResult<()> {
        check_hessian_buffer(out, self.num_params())?;
        let mu = self.mean(param)?;
        let cols = self.data.columns();
        for (a, &ja) in self.positions.iter().enumerate() {
            let wx = &mu * &cols[ja];
            for (b, &jb) in self.positions.iter().enumerate() {
                out[[a, b]] = -wx.dot(&cols[jb]);
            }
        }
        Ok(())
    }
}

/// Gaussian regression with identity link and known dispersion `σ²`.
#[derive(Debug)]
pub struct Gaussian<D: Dataset> {
    data: Arc<D>,
    positions: Vec<usize>,
    response: usize,
}

impl<D: Dataset> Gaussian<D> {
    pub fn new(data: Arc<D>) -> ModelResult<Self> {
        let positions = data.predictor_positions()?;
        let response = data.position(data.response_name()).expect("validated response");
        Ok(Self { data, positions, response })
    }

    fn residuals(&self, param: &DispersionParams) -> ModelResult<Array1<f64>> {
        check_coefficients(param, self.num_params())?;
        let eta = linear_predictor(self.data.columns(), &self.positions, param.coefficients())?;
        Ok(&self.data.columns()[self.response] - &eta)
    }
}

impl<D: Dataset> RegFitter for Gaussian<D> {
    type Param = DispersionParams;

    fn num_params(&self) -> usize {
        self.positions.len()
    }

    fn num_obs(&self) -> usize {
        self.data.num_obs()
    }

    fn predictor_positions(&self) -> &[usize] {
        &self.positions
    }

    fn dataset(&self) -> &[Array1<f64>] {
        self.data.columns()
    }

    fn log_likelihood(&self, param: &DispersionParams, exact: bool) -> ModelResult<f64> {
        let resid = self.residuals(param)?;
        let s2 = param.dispersion();
        let n = resid.len() as f64;
        let mut ll = -0.5 * resid.dot(&resid) / s2 - 0.5 * n * s2.ln();
        if exact {
            ll -= 0.5 * n * (2.0 * PI).ln();
        }
        Ok(ll)
    }

    fn score(&self, param: &DispersionParams, out: &mut Array1<f64>) -> ModelResult<()> {
        check_score_buffer(out, self.num_params())?;
        let resid = self.residuals(param)?;
        for (k, &j) in self.positions.iter().enumerate() {
            out[k] = resid.dot(&self.data.columns()[j]) / param.dispersion();
        }
        Ok(())
    }

    fn hessian(
        &self, param: &DispersionParams, _kind: HessianKind, out: &mut Array2<f64>,
    ) -> ModelResult<()> {
        check_coefficients(param, self.num_params())?;
        check_hessian_buffer(out, self.num_params())?;
        let cols = self.data.columns();
        for (a, &ja) in self.positions.iter().enumerate() {
            for (b, &jb) in self.positions.iter().enumerate() {
                out[[a, b]] = -cols[ja].dot(&cols[jb]) / param.dispersion();
            }
        }
        Ok(())
    }
}

pub fn names(model: &impl RegFitter, data: &ColumnDataset) -> Vec<String> {
    model.predictor_positions().iter().map(|&j| data.var_names()[j].clone()).collect()
}
