//! K-nearest-neighbours regressor.

use selection_spi::{Fittable, ParamSet, Result, SelectionError};
use serde::{Deserialize, Serialize};

/// Memorises the training rows and predicts the mean target of the `k`
/// nearest neighbours under Euclidean distance. `k` is capped at the number
/// of stored rows at prediction time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnnRegressor {
    k: usize,
    x: Vec<Vec<f64>>,
    y: Vec<f64>,
}

impl Default for KnnRegressor {
    fn default() -> Self {
        Self::new(5)
    }
}

impl KnnRegressor {
    pub fn new(k: usize) -> Self {
        Self {
            k: k.max(1),
            x: Vec::new(),
            y: Vec::new(),
        }
    }

    pub fn k(&self) -> usize {
        self.k
    }

    fn distance(a: &[f64], b: &[f64]) -> f64 {
        a.iter()
            .zip(b)
            .map(|(u, v)| (u - v) * (u - v))
            .sum::<f64>()
            .sqrt()
    }

    pub(crate) fn fit_values(&mut self, x: &[Vec<f64>], y: &[f64]) -> Result<()> {
        if x.is_empty() || x.len() != y.len() {
            return Err(SelectionError::InsufficientData {
                required: 1,
                got: x.len().min(y.len()),
            });
        }
        let width = x[0].len();
        if x.iter().any(|row| row.len() != width) {
            return Err(SelectionError::Shape(format!(
                "ragged feature rows, expected width {width}"
            )));
        }
        self.x = x.to_vec();
        self.y = y.to_vec();
        Ok(())
    }

    pub(crate) fn predict_values(&self, x: &[Vec<f64>]) -> Result<Vec<f64>> {
        if self.x.is_empty() {
            return Err(SelectionError::NotFitted("KnnRegressor".to_string()));
        }
        let k = self.k.min(self.x.len());

        x.iter()
            .map(|query| {
                if query.len() != self.x[0].len() {
                    return Err(SelectionError::Shape(format!(
                        "query width {} does not match stored width {}",
                        query.len(),
                        self.x[0].len()
                    )));
                }
                let mut neighbours: Vec<(f64, f64)> = self
                    .x
                    .iter()
                    .zip(&self.y)
                    .map(|(row, &target)| (Self::distance(query, row), target))
                    .collect();
                neighbours
                    .sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
                let sum: f64 = neighbours[..k].iter().map(|(_, target)| target).sum();
                Ok(sum / k as f64)
            })
            .collect()
    }

    pub(crate) fn apply_param_values(&mut self, params: &ParamSet) -> Result<()> {
        for (name, value) in params.iter() {
            match name {
                "k" => {
                    let k = value.as_i64().ok_or_else(|| {
                        SelectionError::Numerical("k must be an integer".to_string())
                    })?;
                    if k < 1 {
                        return Err(SelectionError::Numerical(
                            "k must be at least 1".to_string(),
                        ));
                    }
                    self.k = k as usize;
                }
                other => {
                    return Err(SelectionError::UnknownParameter {
                        unit: "KnnRegressor".to_string(),
                        name: other.to_string(),
                    })
                }
            }
        }
        self.x.clear();
        self.y.clear();
        Ok(())
    }
}

impl Fittable for KnnRegressor {
    fn unit_name(&self) -> &'static str {
        "KnnRegressor"
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
