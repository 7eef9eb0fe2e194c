//! Test-only models used by unit tests across the crate.
use crate::{
    data::{ColumnDataset, Dataset},
    model::{
        errors::ModelResult,
        fitter::{HessianKind, RegFitter},
        params::{CoefParams, Parameter},
        validation::{check_coefficients, check_hessian_buffer, check_score_buffer, linear_predictor},
    },
};
use ndarray::{Array1, Array2, array};
use statrs::function::gamma::ln_gamma;
use std::sync::Arc;

/// y, icept, x with expected Hessian [[-7, -10], [-10, -86]] at β = 0.
pub(crate) fn poisson_dataset() -> Arc<ColumnDataset> {
    let y = array![0.0, 2.0, 0.0, 1.0, 2.0, 1.0, 2.0];
    let icept = Array1::<f64>::ones(7);
    let x = array![9.0, 2.0, -1.0, 0.0, 0.0, 0.0, 0.0];
    Arc::new(
        ColumnDataset::new(
            vec![y, icept, x],
            vec!["y".into(), "icept".into(), "x".into()],
            "y",
            vec!["icept".into(), "x".into()],
        )
        .expect("fixture dataset is well formed"),
    )
}

/// Poisson regression with log link (canonical, so both Hessian kinds agree).
#[derive(Debug, Clone)]
pub(crate) struct PoissonModel {
    data: Arc<ColumnDataset>,
    positions: Vec<usize>,
    response: usize,
}

impl PoissonModel {
    pub(crate) fn new(data: Arc<ColumnDataset>) -> ModelResult<Self> {
        let positions = data.predictor_positions()?;
        let response = data.position(data.response_name()).expect("validated response");
        Ok(Self { data, positions, response })
    }

    fn mean(&self, param: &CoefParams) -> ModelResult<Array1<f64>> {
        check_coefficients(param, self.num_params())?;
        let eta = linear_predictor(self.data.columns(), &self.positions, param.coefficients())?;
        Ok(eta.mapv(f64::exp))
    }
}

impl RegFitter for PoissonModel {
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
        let mu = self.mean(param)?;
        let resid = &self.data.columns()[self.response] - &mu;
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

/// Model whose Hessian is a fixed matrix, independent of the parameter.
#[derive(Debug, Clone)]
pub(crate) struct FixedHessianModel {
    pub(crate) hessian: Array2<f64>,
    pub(crate) columns: Vec<Array1<f64>>,
    pub(crate) positions: Vec<usize>,
}

impl FixedHessianModel {
    /// Two predictors over three observations; column 0 plays the response.
    pub(crate) fn new(hessian: Array2<f64>) -> Self {
        let columns = vec![array![1.0, 0.0, 2.0], array![1.0, 1.0, 1.0], array![0.5, -1.0, 2.0]];
        Self { hessian, columns, positions: vec![1, 2] }
    }
}

impl RegFitter for FixedHessianModel {
    type Param = CoefParams;

    fn num_params(&self) -> usize {
        self.hessian.nrows()
    }

    fn num_obs(&self) -> usize {
        self.columns[0].len()
    }

    fn predictor_positions(&self) -> &[usize] {
        &self.positions
    }

    fn dataset(&self) -> &[Array1<f64>] {
        &self.columns
    }

    fn log_likelihood(&self, param: &CoefParams, _exact: bool) -> ModelResult<f64> {
        check_coefficients(param, self.num_params())?;
        let b = param.coefficients();
        Ok(0.5 * b.dot(&self.hessian.dot(b)))
    }

    fn score(&self, param: &CoefParams, out: &mut Array1<f64>) -> ModelResult<()> {
        check_coefficients(param, self.num_params())?;
        check_score_buffer(out, self.num_params())?;
        out.assign(&self.hessian.dot(param.coefficients()));
        Ok(())
    }

    fn hessian(
        &self, param: &CoefParams, _kind: HessianKind, out: &mut Array2<f64>,
    ) -> ModelResult<()> {
        check_coefficients(param, self.num_params())?;
        check_hessian_buffer(out, self.num_params())?;
        out.assign(&self.hessian);
        Ok(())
    }
}
