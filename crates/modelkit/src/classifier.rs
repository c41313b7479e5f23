//! Ridge-based binary classifier.

use selection_spi::{Fittable, ParamSet, Result, SelectionError};
use serde::{Deserialize, Serialize};

use crate::ridge::RidgeRegressor;

/// Binary classifier over a ridge regression: labels are mapped to -1/+1,
/// the regressor is fitted on the signed targets, and predictions take the
/// sign of the regression output (1.0 for positive, 0.0 otherwise).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RidgeClassifier {
    inner: RidgeRegressor,
}

impl Default for RidgeClassifier {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl RidgeClassifier {
    pub fn new(alpha: f64) -> Self {
        Self {
            inner: RidgeRegressor::new(alpha),
        }
    }

    pub fn alpha(&self) -> f64 {
        self.inner.alpha()
    }
}

impl Fittable for RidgeClassifier {
    fn unit_name(&self) -> &'static str {
        "RidgeClassifier"
    }

    fn fit(&mut self, x: &[Vec<f64>], y: &[f64]) -> Result<()> {
        let signed: Vec<f64> = y
            .iter()
            .map(|&label| if label > 0.0 { 1.0 } else { -1.0 })
            .collect();
        self.inner.fit_values(x, &signed)
    }

    fn predict(&self, x: &[Vec<f64>]) -> Result<Vec<f64>> {
        let scores = self.inner.predict_values(x)?;
        Ok(scores
            .into_iter()
            .map(|score| if score > 0.0 { 1.0 } else { 0.0 })
            .collect())
    }

    fn apply_params(&mut self, params: &ParamSet) -> Result<()> {
        self.inner.apply_param_values(params).map_err(|error| {
            // keep the classifier's own name in parameter errors
            match error {
                SelectionError::UnknownParameter { name, .. } => {
                    SelectionError::UnknownParameter {
                        unit: "RidgeClassifier".to_string(),
                        name,
                    }
                }
                other => other,
            }
        })
    }
}
