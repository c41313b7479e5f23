//! Resampling-based bias/variance decomposition.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use selection_api::ComparisonConfig;
use selection_spi::{
    Candidate, EvaluationSummary, Fittable, Result, Role, SelectionError, SummaryEntry,
};

/// Estimates each candidate's generalization behaviour by repeatedly
/// bootstrap-resampling the training partition, refitting every candidate on
/// the resample, and predicting the fixed test partition.
///
/// Iterations are independent of each other and of per-candidate fits within
/// an iteration; they run sequentially so a single seeded generator drives
/// the whole decomposition.
#[derive(Debug, Clone)]
pub struct BiasVarianceEvaluator {
    resamples: usize,
    seed: u64,
}

impl BiasVarianceEvaluator {
    pub fn new(resamples: usize, seed: u64) -> Self {
        Self {
            resamples: resamples.max(1),
            seed,
        }
    }

    pub fn from_config(config: &ComparisonConfig) -> Self {
        Self::new(config.resamples, config.seed)
    }

    /// Decompose expected loss per candidate. Output ordering matches the
    /// candidate order; values are comparable across candidates because the
    /// resamples and the test partition are held fixed.
    pub fn decompose<M: Fittable + Clone>(
        &self,
        candidates: &[Candidate<M>],
        x_train: &[Vec<f64>],
        y_train: &[f64],
        x_test: &[Vec<f64>],
        y_test: &[f64],
        role: Role,
    ) -> Result<EvaluationSummary> {
        if y_train.is_empty() {
            return Err(SelectionError::InsufficientData { required: 1, got: 0 });
        }
        if y_test.is_empty() {
            return Err(SelectionError::InsufficientData { required: 1, got: 0 });
        }

        log::info!(
            "bias/variance decomposition: {} candidates, {} resamples",
            candidates.len(),
            self.resamples
        );

        let n = y_train.len();
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut predictions: Vec<Vec<Vec<f64>>> = vec![Vec::with_capacity(self.resamples); candidates.len()];

        for _ in 0..self.resamples {
            // Bootstrap: with replacement, original size.
            let indices: Vec<usize> = (0..n).map(|_| rng.gen_range(0..n)).collect();
            let bx: Vec<Vec<f64>> = indices.iter().map(|&i| x_train[i].clone()).collect();
            let by: Vec<f64> = indices.iter().map(|&i| y_train[i]).collect();

            for (slot, candidate) in predictions.iter_mut().zip(candidates.iter()) {
                let mut unit = candidate.unit.clone();
                let refit = unit
                    .fit(&bx, &by)
                    .and_then(|_| unit.predict(x_test))
                    .map_err(|error| SelectionError::Fit {
                        candidate: candidate.label.clone(),
                        reason: error.to_string(),
                    })?;
                if refit.len() != y_test.len() {
                    return Err(SelectionError::Fit {
                        candidate: candidate.label.clone(),
                        reason: format!(
                            "predicted {} values for {} test rows",
                            refit.len(),
                            y_test.len()
                        ),
                    });
                }
                slot.push(refit);
            }
        }

        let entries = candidates
            .iter()
            .zip(predictions.iter())
            .map(|(candidate, preds)| match role {
                Role::Estimator => squared_loss_entry(&candidate.label, preds, y_test),
                Role::Classifier => zero_one_entry(&candidate.label, preds, y_test),
            })
            .collect();

        Ok(EvaluationSummary::new(entries))
    }
}

/// Squared-loss decomposition: expected loss, squared bias of the mean
/// prediction, and mean pointwise variance.
fn squared_loss_entry(label: &str, preds: &[Vec<f64>], y_test: &[f64]) -> SummaryEntry {
    let iterations = preds.len() as f64;
    let points = y_test.len();

    let mut loss = 0.0;
    let mut bias = 0.0;
    let mut variance = 0.0;
    for j in 0..points {
        let mean_pred = preds.iter().map(|p| p[j]).sum::<f64>() / iterations;
        loss += preds.iter().map(|p| (p[j] - y_test[j]).powi(2)).sum::<f64>() / iterations;
        bias += (mean_pred - y_test[j]).powi(2);
        variance += preds.iter().map(|p| (p[j] - mean_pred).powi(2)).sum::<f64>() / iterations;
    }

    SummaryEntry {
        label: label.to_string(),
        loss: loss / points as f64,
        bias: bias / points as f64,
        variance: variance / points as f64,
    }
}

/// 0-1 loss decomposition against the modal prediction; ties on the mode go
/// to the smaller label.
fn zero_one_entry(label: &str, preds: &[Vec<f64>], y_test: &[f64]) -> SummaryEntry {
    let iterations = preds.len();
    let points = y_test.len();

    let mut loss = 0.0;
    let mut bias = 0.0;
    let mut variance = 0.0;
    for j in 0..points {
        let ones = preds.iter().filter(|p| p[j] > 0.5).count();
        let mode = if ones * 2 > iterations { 1.0 } else { 0.0 };

        loss += preds
            .iter()
            .filter(|p| (p[j] - y_test[j]).abs() > f64::EPSILON)
            .count() as f64
            / iterations as f64;
        if (mode - y_test[j]).abs() > f64::EPSILON {
            bias += 1.0;
        }
        variance += preds
            .iter()
            .filter(|p| (p[j] - mode).abs() > f64::EPSILON)
            .count() as f64
            / iterations as f64;
    }

    SummaryEntry {
        label: label.to_string(),
        loss: loss / points as f64,
        bias: bias / points as f64,
        variance: variance / points as f64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use selection_spi::ParamSet;

    /// Predicts the mean of its training targets.
    #[derive(Debug, Clone)]
    struct MeanUnit {
        level: Option<f64>,
    }

    impl MeanUnit {
        fn new() -> Self {
            Self { level: None }
        }
    }

    impl Fittable for MeanUnit {
        fn unit_name(&self) -> &'static str {
            "MeanUnit"
        }

        fn fit(&mut self, _x: &[Vec<f64>], y: &[f64]) -> Result<()> {
            self.level = Some(y.iter().sum::<f64>() / y.len() as f64);
            Ok(())
        }

        fn predict(&self, x: &[Vec<f64>]) -> Result<Vec<f64>> {
            let level = self
                .level
                .ok_or_else(|| SelectionError::NotFitted("MeanUnit".to_string()))?;
            Ok(vec![level; x.len()])
        }

        fn apply_params(&mut self, _params: &ParamSet) -> Result<()> {
            Ok(())
        }
    }

    /// Predicts a fixed constant regardless of training data.
    #[derive(Debug, Clone)]
    struct FixedUnit(f64);

    impl Fittable for FixedUnit {
        fn unit_name(&self) -> &'static str {
            "FixedUnit"
        }

        fn fit(&mut self, _x: &[Vec<f64>], _y: &[f64]) -> Result<()> {
            Ok(())
        }

        fn predict(&self, x: &[Vec<f64>]) -> Result<Vec<f64>> {
            Ok(vec![self.0; x.len()])
        }

        fn apply_params(&mut self, _params: &ParamSet) -> Result<()> {
            Ok(())
        }
    }

    fn rows(n: usize) -> Vec<Vec<f64>> {
        (0..n).map(|i| vec![i as f64]).collect()
    }

    #[test]
    fn test_fixed_unit_has_zero_variance() {
        let candidates = vec![Candidate::new("Default", FixedUnit(3.0))];
        let evaluator = BiasVarianceEvaluator::new(10, 7);
        let summary = evaluator
            .decompose(
                &candidates,
                &rows(20),
                &vec![5.0; 20],
                &rows(5),
                &[5.0; 5],
                Role::Estimator,
            )
            .unwrap();

        let entry = &summary.entries[0];
        assert!(entry.variance.abs() < 1e-12);
        // deterministic predictor: loss equals squared bias, (5 - 3)^2 = 4
        assert!((entry.bias - 4.0).abs() < 1e-12);
        assert!((entry.loss - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_loss_decomposes_into_bias_plus_variance() {
        // Targets equal the conditional mean, so irreducible noise on the
        // fixed test partition is zero and loss = bias + variance exactly.
        let y_train: Vec<f64> = (0..30).map(|i| (i % 5) as f64).collect();
        let candidates = vec![Candidate::new("Default", MeanUnit::new())];
        let evaluator = BiasVarianceEvaluator::new(25, 3);
        let summary = evaluator
            .decompose(
                &candidates,
                &rows(30),
                &y_train,
                &rows(4),
                &[2.0; 4],
                Role::Estimator,
            )
            .unwrap();

        let entry = &summary.entries[0];
        assert!(entry.loss >= 0.0);
        assert!(
            (entry.loss - (entry.bias + entry.variance)).abs() < 1e-9,
            "loss {} != bias {} + variance {}",
            entry.loss,
            entry.bias,
            entry.variance
        );
    }

    #[test]
    fn test_deterministic_for_fixed_seed() {
        let candidates = vec![
            Candidate::new("Default", MeanUnit::new()),
            Candidate::new("Tuned", MeanUnit::new()),
        ];
        let y: Vec<f64> = (0..25).map(|i| i as f64).collect();
        let evaluator = BiasVarianceEvaluator::new(8, 99);

        let first = evaluator
            .decompose(&candidates, &rows(25), &y, &rows(5), &[10.0; 5], Role::Estimator)
            .unwrap();
        let second = evaluator
            .decompose(&candidates, &rows(25), &y, &rows(5), &[10.0; 5], Role::Estimator)
            .unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_classifier_rates_are_probabilities() {
        let candidates = vec![Candidate::new("Default", FixedUnit(1.0))];
        let evaluator = BiasVarianceEvaluator::new(6, 0);
        let summary = evaluator
            .decompose(
                &candidates,
                &rows(20),
                &vec![1.0; 20],
                &rows(6),
                &[1.0, 1.0, 0.0, 1.0, 0.0, 1.0],
                Role::Classifier,
            )
            .unwrap();

        let entry = &summary.entries[0];
        assert!((0.0..=1.0).contains(&entry.loss));
        assert!((0.0..=1.0).contains(&entry.bias));
        assert!((0.0..=1.0).contains(&entry.variance));
        // constant 1-predictor is wrong on the two zeros
        assert!((entry.loss - 2.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_ordering_matches_candidates() {
        let candidates = vec![
            Candidate::new("Default", FixedUnit(1.0)),
            Candidate::new("Tuned", FixedUnit(2.0)),
        ];
        let evaluator = BiasVarianceEvaluator::new(3, 0);
        let summary = evaluator
            .decompose(
                &candidates,
                &rows(10),
                &[0.0; 10],
                &rows(3),
                &[0.0; 3],
                Role::Estimator,
            )
            .unwrap();
        assert_eq!(summary.entries[0].label, "Default");
        assert_eq!(summary.entries[1].label, "Tuned");
        assert!(summary.entries[0].loss < summary.entries[1].loss);
    }

    /// Always predicts one value fewer than asked for.
    #[derive(Debug, Clone)]
    struct ShortUnit;

    impl Fittable for ShortUnit {
        fn unit_name(&self) -> &'static str {
            "ShortUnit"
        }

        fn fit(&mut self, _x: &[Vec<f64>], _y: &[f64]) -> Result<()> {
            Ok(())
        }

        fn predict(&self, x: &[Vec<f64>]) -> Result<Vec<f64>> {
            Ok(vec![0.0; x.len().saturating_sub(1)])
        }

        fn apply_params(&mut self, _params: &ParamSet) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_short_prediction_surfaces_as_fit_failure() {
        let candidates = vec![Candidate::new("Default", ShortUnit)];
        let evaluator = BiasVarianceEvaluator::new(3, 0);
        let result = evaluator.decompose(
            &candidates,
            &rows(10),
            &[1.0; 10],
            &rows(4),
            &[1.0; 4],
            Role::Estimator,
        );
        assert!(matches!(
            result,
            Err(SelectionError::Fit { ref candidate, .. }) if candidate == "Default"
        ));
    }

    #[test]
    fn test_empty_test_partition_rejected() {
        let candidates = vec![Candidate::new("Default", FixedUnit(1.0))];
        let evaluator = BiasVarianceEvaluator::new(3, 0);
        let result = evaluator.decompose(
            &candidates,
            &rows(10),
            &[0.0; 10],
            &rows(0),
            &[],
            Role::Estimator,
        );
        assert!(matches!(
            result,
            Err(SelectionError::InsufficientData { .. })
        ));
    }
}
