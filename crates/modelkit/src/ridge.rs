//! L2-regularised linear regressor.

use selection_spi::{Fittable, ParamSet, Result, SelectionError};
use serde::{Deserialize, Serialize};

use crate::solve::solve;

/// Linear regressor with an L2 penalty on the weights, solved through the
/// normal equations. The intercept is kept out of the penalty by centering
/// the features and targets before solving.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RidgeRegressor {
    alpha: f64,
    fit_intercept: bool,
    weights: Option<Vec<f64>>,
    intercept: f64,
}

impl Default for RidgeRegressor {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl RidgeRegressor {
    pub fn new(alpha: f64) -> Self {
        Self {
            alpha: alpha.max(0.0),
            fit_intercept: true,
            weights: None,
            intercept: 0.0,
        }
    }

    pub fn fit_intercept(mut self, fit_intercept: bool) -> Self {
        self.fit_intercept = fit_intercept;
        self
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn weights(&self) -> Option<&[f64]> {
        self.weights.as_deref()
    }

    pub(crate) fn fit_values(&mut self, x: &[Vec<f64>], y: &[f64]) -> Result<()> {
        let rows = x.len();
        if rows == 0 || rows != y.len() {
            return Err(SelectionError::InsufficientData {
                required: 1,
                got: rows.min(y.len()),
            });
        }
        let cols = x[0].len();
        if cols == 0 {
            return Err(SelectionError::Shape("no feature columns".to_string()));
        }
        if x.iter().any(|row| row.len() != cols) {
            return Err(SelectionError::Shape(format!(
                "ragged feature rows, expected width {cols}"
            )));
        }

        let (x_mean, y_mean) = if self.fit_intercept {
            let mut x_mean = vec![0.0; cols];
            for row in x {
                for (mean, value) in x_mean.iter_mut().zip(row) {
                    *mean += value;
                }
            }
            for mean in &mut x_mean {
                *mean /= rows as f64;
            }
            let y_mean = y.iter().sum::<f64>() / rows as f64;
            (x_mean, y_mean)
        } else {
            (vec![0.0; cols], 0.0)
        };

        // Normal equations on centered data: (X'X + alpha I) w = X'y
        let mut gram = vec![vec![0.0; cols]; cols];
        let mut moment = vec![0.0; cols];
        for (row, &target) in x.iter().zip(y) {
            let centered: Vec<f64> = row.iter().zip(&x_mean).map(|(v, m)| v - m).collect();
            let target = target - y_mean;
            for i in 0..cols {
                for j in 0..cols {
                    gram[i][j] += centered[i] * centered[j];
                }
                moment[i] += centered[i] * target;
            }
        }
        for i in 0..cols {
            gram[i][i] += self.alpha;
        }

        let weights = solve(gram, moment)?;
        self.intercept = y_mean
            - weights
                .iter()
                .zip(&x_mean)
                .map(|(w, m)| w * m)
                .sum::<f64>();
        self.weights = Some(weights);
        Ok(())
    }

    pub(crate) fn predict_values(&self, x: &[Vec<f64>]) -> Result<Vec<f64>> {
        let weights = self
            .weights
            .as_ref()
            .ok_or_else(|| SelectionError::NotFitted("RidgeRegressor".to_string()))?;
        x.iter()
            .map(|row| {
                if row.len() != weights.len() {
                    return Err(SelectionError::Shape(format!(
                        "row width {} does not match {} fitted weights",
                        row.len(),
                        weights.len()
                    )));
                }
                Ok(self.intercept + row.iter().zip(weights).map(|(v, w)| v * w).sum::<f64>())
            })
            .collect()
    }

    pub(crate) fn apply_param_values(&mut self, params: &ParamSet) -> Result<()> {
        for (name, value) in params.iter() {
            match name {
                "alpha" => {
                    self.alpha = value
                        .as_f64()
                        .ok_or_else(|| SelectionError::Numerical(
                            "alpha must be numeric".to_string(),
                        ))?
                        .max(0.0);
                }
                "fit_intercept" => {
                    self.fit_intercept = value.as_bool().ok_or_else(|| {
                        SelectionError::Numerical("fit_intercept must be a flag".to_string())
                    })?;
                }
                other => {
                    return Err(SelectionError::UnknownParameter {
                        unit: "RidgeRegressor".to_string(),
                        name: other.to_string(),
                    })
                }
            }
        }
        // a reconfigured unit must be refitted
        self.weights = None;
        self.intercept = 0.0;
        Ok(())
    }
}

impl Fittable for RidgeRegressor {
    fn unit_name(&self) -> &'static str {
        "RidgeRegressor"
    }

    fn fit(&mut self, x: &[Vec<f64>], y: &[f64]) -> Result<()> {
        self.fit_values(x, y)
    }

    fn predict(&self, x: &[Vec<f64>]) -> Result<Vec<f64>> {
        self.predict_values(x)
    }

    fn apply_params(&mut self, params: &ParamSet) -> Result<()> {
        self.apply_param_values(params)
    }
}
