//! Feature-standardizing wrapper.

use selection_spi::{Fittable, ParamSet, Result, SelectionError};
use serde::{Deserialize, Serialize};

/// Wraps a unit so it trains and predicts on standardized features: at fit
/// time the per-feature mean and standard deviation of the training rows are
/// recorded and every row is transformed to zero mean and unit variance
/// before reaching the inner unit. A constant feature keeps a divisor of 1.0
/// so it maps to zero instead of NaN.
///
/// Hyperparameters pass straight through to the inner unit; applying them
/// resets the recorded statistics along with the inner fit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaledUnit<M> {
    inner: M,
    means: Vec<f64>,
    stds: Vec<f64>,
}

impl<M> ScaledUnit<M> {
    pub fn new(inner: M) -> Self {
        Self {
            inner,
            means: Vec::new(),
            stds: Vec::new(),
        }
    }

    pub fn inner(&self) -> &M {
        &self.inner
    }

    fn transform(&self, row: &[f64]) -> Vec<f64> {
        row.iter()
            .zip(self.means.iter().zip(&self.stds))
            .map(|(value, (mean, std))| (value - mean) / std)
            .collect()
    }
}

impl<M: Fittable> Fittable for ScaledUnit<M> {
    fn unit_name(&self) -> &'static str {
        self.inner.unit_name()
    }

    fn fit(&mut self, x: &[Vec<f64>], y: &[f64]) -> Result<()> {
        if x.is_empty() {
            // let the inner unit report the data error
            return self.inner.fit(x, y);
        }
        let width = x[0].len();
        if x.iter().any(|row| row.len() != width) {
            return Err(SelectionError::Shape(format!(
                "ragged feature rows, expected width {width}"
            )));
        }

        let rows = x.len() as f64;
        let mut means = vec![0.0; width];
        for row in x {
            for (mean, value) in means.iter_mut().zip(row) {
                *mean += value;
            }
        }
        for mean in &mut means {
            *mean /= rows;
        }

        let mut stds = vec![0.0; width];
        for row in x {
            for ((std, mean), value) in stds.iter_mut().zip(&means).zip(row) {
                *std += (value - mean) * (value - mean);
            }
        }
        for std in &mut stds {
            *std = (*std / rows).sqrt();
            if *std < 1e-12 {
                *std = 1.0;
            }
        }

        self.means = means;
        self.stds = stds;
        let scaled: Vec<Vec<f64>> = x.iter().map(|row| self.transform(row)).collect();
        match self.inner.fit(&scaled, y) {
            Ok(()) => Ok(()),
            Err(error) => {
                self.means.clear();
                self.stds.clear();
                Err(error)
            }
        }
    }

    fn predict(&self, x: &[Vec<f64>]) -> Result<Vec<f64>> {
        if self.means.is_empty() {
            return Err(SelectionError::NotFitted(self.unit_name().to_string()));
        }
        if x.iter().any(|row| row.len() != self.means.len()) {
            return Err(SelectionError::Shape(format!(
                "query width does not match {} fitted features",
                self.means.len()
            )));
        }
        let scaled: Vec<Vec<f64>> = x.iter().map(|row| self.transform(row)).collect();
        self.inner.predict(&scaled)
    }

    fn apply_params(&mut self, params: &ParamSet) -> Result<()> {
        self.inner.apply_params(params)?;
        self.means.clear();
        self.stds.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knn::KnnRegressor;
    use crate::ridge::RidgeRegressor;
    use selection_spi::ParamValue;
    use std::sync::{Arc, Mutex};

    /// Records the rows it was fitted on and predicts zero.
    #[derive(Debug, Clone)]
    struct SpyUnit {
        seen: Arc<Mutex<Vec<Vec<f64>>>>,
    }

    impl SpyUnit {
        fn new() -> Self {
            Self {
                seen: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    impl Fittable for SpyUnit {
        fn unit_name(&self) -> &'static str {
            "SpyUnit"
        }

        fn fit(&mut self, x: &[Vec<f64>], _y: &[f64]) -> Result<()> {
            *self.seen.lock().unwrap() = x.to_vec();
            Ok(())
        }

        fn predict(&self, x: &[Vec<f64>]) -> Result<Vec<f64>> {
            Ok(vec![0.0; x.len()])
        }

        fn apply_params(&mut self, _params: &ParamSet) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_inner_unit_sees_standardized_features() {
        let mut unit = ScaledUnit::new(SpyUnit::new());
        let x: Vec<Vec<f64>> = (0..10).map(|i| vec![i as f64 * 100.0]).collect();
        unit.fit(&x, &[0.0; 10]).unwrap();

        let seen = unit.inner().seen.lock().unwrap();
        let mean: f64 = seen.iter().map(|row| row[0]).sum::<f64>() / seen.len() as f64;
        let variance: f64 =
            seen.iter().map(|row| (row[0] - mean).powi(2)).sum::<f64>() / seen.len() as f64;
        assert!(mean.abs() < 1e-9);
        assert!((variance - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_constant_feature_maps_to_zero() {
        let mut unit = ScaledUnit::new(SpyUnit::new());
        let x = vec![vec![7.0], vec![7.0], vec![7.0]];
        unit.fit(&x, &[0.0; 3]).unwrap();

        let seen = unit.inner().seen.lock().unwrap();
        assert!(seen.iter().all(|row| row[0].abs() < 1e-12));
    }

    #[test]
    fn test_ridge_predictions_unchanged_by_scaling() {
        // ridge with an intercept is affine-equivariant, so standardizing
        // the features must not move its predictions
        let x: Vec<Vec<f64>> = (0..20).map(|i| vec![i as f64 * 50.0]).collect();
        let y: Vec<f64> = (0..20).map(|i| 3.0 + 0.1 * i as f64).collect();

        let mut plain = RidgeRegressor::new(0.0);
        plain.fit(&x, &y).unwrap();
        let mut scaled = ScaledUnit::new(RidgeRegressor::new(0.0));
        scaled.fit(&x, &y).unwrap();

        let query = vec![vec![250.0], vec![990.0]];
        let expected = plain.predict(&query).unwrap();
        let actual = scaled.predict(&query).unwrap();
        for (a, e) in actual.iter().zip(&expected) {
            assert!((a - e).abs() < 1e-9);
        }
    }

    #[test]
    fn test_scaling_balances_knn_distances() {
        // the first feature dominates the raw distances and would hand the
        // query to the 9.0 neighbours; standardization lets the informative
        // second feature decide
        let x = vec![
            vec![0.0, 0.0],
            vec![10000.0, 0.1],
            vec![5000.0, 10.0],
            vec![5100.0, 10.1],
        ];
        let y = vec![1.0, 1.0, 9.0, 9.0];
        let mut unit = ScaledUnit::new(KnnRegressor::new(2));
        unit.fit(&x, &y).unwrap();

        let predictions = unit.predict(&[vec![5050.0, 0.05]]).unwrap();
        assert!((predictions[0] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_predict_before_fit_fails() {
        let unit = ScaledUnit::new(RidgeRegressor::new(1.0));
        assert!(matches!(
            unit.predict(&[vec![1.0]]),
            Err(SelectionError::NotFitted(_))
        ));
    }

    #[test]
    fn test_apply_params_resets_scaling_state() {
        let x: Vec<Vec<f64>> = (0..10).map(|i| vec![i as f64]).collect();
        let y: Vec<f64> = (0..10).map(|i| i as f64).collect();
        let mut unit = ScaledUnit::new(RidgeRegressor::new(1.0));
        unit.fit(&x, &y).unwrap();

        unit.apply_params(&ParamSet::new().with("alpha", ParamValue::Float(0.5)))
            .unwrap();
        assert!(matches!(
            unit.predict(&[vec![1.0]]),
            Err(SelectionError::NotFitted(_))
        ));
    }

    #[test]
    fn test_query_width_mismatch() {
        let mut unit = ScaledUnit::new(RidgeRegressor::new(1.0));
        let x: Vec<Vec<f64>> = (0..5).map(|i| vec![i as f64]).collect();
        unit.fit(&x, &[1.0; 5]).unwrap();
        assert!(matches!(
            unit.predict(&[vec![1.0, 2.0]]),
            Err(SelectionError::Shape(_))
        ));
    }
}
