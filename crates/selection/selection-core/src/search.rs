//! Hyperparameter search engine.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use selection_api::{ComparisonConfig, SearchStrategy};
use selection_spi::{
    CandidateDescriptor, Fittable, ParamSet, Result, Role, SearchOutcome, SelectionError,
};

use crate::metrics::{error_rate, mean, mse};
use crate::splitter::{ExpandingWindowSplit, ValidationSplit};

/// Searches a candidate's declared hyperparameter domains under an
/// expanding-window cross-validation scheme.
///
/// Combination evaluations are independent and run on the rayon pool; the
/// reduction keeps the lowest-scoring combination and breaks exact ties by
/// the lowest combination index, so the result does not depend on worker
/// scheduling.
#[derive(Debug, Clone)]
pub struct HyperparameterSearch {
    folds: usize,
    iterations: usize,
    seed: u64,
}

impl HyperparameterSearch {
    pub fn new(folds: usize, iterations: usize, seed: u64) -> Self {
        Self {
            folds: folds.max(2),
            iterations: iterations.max(1),
            seed,
        }
    }

    pub fn from_config(config: &ComparisonConfig) -> Self {
        Self::new(config.cv_folds, config.search_iterations, config.seed)
    }

    /// Search the descriptor's space and return the best-found configuration,
    /// refitted on the full training partition.
    ///
    /// `method` is validated before any fitting occurs; an unknown strategy
    /// fails with [`SelectionError::InvalidStrategy`] and performs no work.
    pub fn run<M: Fittable + Clone>(
        &self,
        descriptor: &CandidateDescriptor<M>,
        x_train: &[Vec<f64>],
        y_train: &[f64],
        method: &str,
    ) -> Result<SearchOutcome<M>> {
        let strategy: SearchStrategy = method.parse()?;

        let splits = ExpandingWindowSplit::new(self.folds).splits(y_train.len())?;
        let space = descriptor.search_space();
        let combinations = space.combinations();

        let sets: Vec<ParamSet> = match strategy {
            SearchStrategy::Grid => (0..combinations).map(|i| space.at(i)).collect(),
            SearchStrategy::Randomised => {
                // Draws with replacement; a uniform combination index is a
                // uniform draw across the declared domains.
                let mut rng = StdRng::seed_from_u64(self.seed);
                (0..self.iterations)
                    .map(|_| space.at(rng.gen_range(0..combinations)))
                    .collect()
            }
        };

        log::info!(
            "searching '{}' ({}) via {} over {} parameter sets",
            descriptor.name(),
            descriptor.role(),
            strategy,
            sets.len()
        );

        let scored: Vec<(usize, f64)> = sets
            .par_iter()
            .enumerate()
            .map(|(index, params)| {
                let score = self.score_params(descriptor, params, x_train, y_train, &splits)?;
                Ok((index, score))
            })
            .collect::<Result<Vec<_>>>()?;

        let mut best: Option<(usize, f64)> = None;
        for (index, score) in scored {
            if !score.is_finite() {
                continue;
            }
            match best {
                Some((_, current)) if score >= current => {}
                _ => best = Some((index, score)),
            }
        }

        let (best_index, best_score) = best.ok_or_else(|| {
            SelectionError::NoViableCandidates(
                "no parameter set produced a finite validation score".to_string(),
            )
        })?;
        let best_params = sets[best_index].clone();

        let mut best_unit = descriptor.base().clone();
        best_unit.apply_params(&best_params)?;
        best_unit.fit(x_train, y_train)?;

        log::info!(
            "best '{}' score {:.6} with [{}]",
            descriptor.name(),
            best_score,
            best_params
        );

        Ok(SearchOutcome {
            best_unit,
            best_score,
            best_params,
        })
    }

    /// Mean validation score of one parameter set across all folds.
    fn score_params<M: Fittable + Clone>(
        &self,
        descriptor: &CandidateDescriptor<M>,
        params: &ParamSet,
        x_train: &[Vec<f64>],
        y_train: &[f64],
        splits: &[ValidationSplit],
    ) -> Result<f64> {
        let mut configured = descriptor.base().clone();
        configured.apply_params(params)?;

        let mut scores = Vec::with_capacity(splits.len());
        for split in splits {
            let mut unit = configured.clone();
            unit.fit(
                &x_train[..split.train_end],
                &y_train[..split.train_end],
            )?;
            let predicted = unit.predict(&x_train[split.test_start..split.test_end])?;
            let actual = &y_train[split.test_start..split.test_end];
            let score = match descriptor.role() {
                Role::Estimator => mse(actual, &predicted),
                Role::Classifier => error_rate(actual, &predicted),
            };
            scores.push(score);
        }
        Ok(mean(&scores))
    }
}
