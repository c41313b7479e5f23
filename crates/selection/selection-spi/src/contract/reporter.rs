//! Reporting collaborator contract.

use crate::model::Prediction;
use crate::Result;

/// Receives held-out targets and per-candidate predictions for analysis.
///
/// Plotting and result persistence live behind this seam; the core produces
/// predictions and hands them over.
pub trait Reporter {
    fn report(&self, y_test: &[f64], predictions: &[Prediction], dataset_name: &str) -> Result<()>;
}
