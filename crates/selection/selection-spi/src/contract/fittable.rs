//! The opaque fit/predict unit contract.

use crate::model::ParamSet;
use crate::Result;

/// An opaque model exposing fit/predict operations; role-agnostic.
///
/// The comparison core never inspects a unit's internals: it fits units on
/// training rows, asks for predictions on held-out rows, and reconfigures
/// clones via [`apply_params`](Fittable::apply_params). Applying parameters
/// must reset any previously fitted state.
pub trait Fittable: Send + Sync {
    /// Stable unit name, used in error messages and logs.
    fn unit_name(&self) -> &'static str;

    /// Fit on feature rows `x` and aligned targets `y`.
    fn fit(&mut self, x: &[Vec<f64>], y: &[f64]) -> Result<()>;

    /// Predict one value per feature row.
    fn predict(&self, x: &[Vec<f64>]) -> Result<Vec<f64>>;

    /// Apply hyperparameters; unknown keys must fail with
    /// [`SelectionError::UnknownParameter`](crate::SelectionError::UnknownParameter).
    fn apply_params(&mut self, params: &ParamSet) -> Result<()>;
}
