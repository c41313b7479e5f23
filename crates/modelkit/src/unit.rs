//! Serializable wrapper over the concrete units.

use selection_spi::{Fittable, ParamSet, Result};
use serde::{Deserialize, Serialize};

use crate::classifier::RidgeClassifier;
use crate::knn::KnnRegressor;
use crate::ridge::RidgeRegressor;
use crate::scaler::ScaledUnit;

/// Any of the reference units, as one serializable type. Comparison runs and
/// the JSON store operate on this enum so persisted models round-trip
/// without dynamic dispatch. Every variant trains on standardized features
/// through [`ScaledUnit`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ModelUnit {
    Ridge(ScaledUnit<RidgeRegressor>),
    Knn(ScaledUnit<KnnRegressor>),
    RidgeClassifier(ScaledUnit<RidgeClassifier>),
}

impl ModelUnit {
    pub fn ridge(inner: RidgeRegressor) -> Self {
        ModelUnit::Ridge(ScaledUnit::new(inner))
    }

    pub fn knn(inner: KnnRegressor) -> Self {
        ModelUnit::Knn(ScaledUnit::new(inner))
    }

    pub fn ridge_classifier(inner: RidgeClassifier) -> Self {
        ModelUnit::RidgeClassifier(ScaledUnit::new(inner))
    }
}

impl Fittable for ModelUnit {
    fn unit_name(&self) -> &'static str {
        match self {
            ModelUnit::Ridge(unit) => unit.unit_name(),
            ModelUnit::Knn(unit) => unit.unit_name(),
            ModelUnit::RidgeClassifier(unit) => unit.unit_name(),
        }
    }

    fn fit(&mut self, x: &[Vec<f64>], y: &[f64]) -> Result<()> {
        match self {
            ModelUnit::Ridge(unit) => unit.fit(x, y),
            ModelUnit::Knn(unit) => unit.fit(x, y),
            ModelUnit::RidgeClassifier(unit) => unit.fit(x, y),
        }
    }

    fn predict(&self, x: &[Vec<f64>]) -> Result<Vec<f64>> {
        match self {
            ModelUnit::Ridge(unit) => unit.predict(x),
            ModelUnit::Knn(unit) => unit.predict(x),
            ModelUnit::RidgeClassifier(unit) => unit.predict(x),
        }
    }

    fn apply_params(&mut self, params: &ParamSet) -> Result<()> {
        match self {
            ModelUnit::Ridge(unit) => unit.apply_params(params),
            ModelUnit::Knn(unit) => unit.apply_params(params),
            ModelUnit::RidgeClassifier(unit) => unit.apply_params(params),
        }
    }
}
