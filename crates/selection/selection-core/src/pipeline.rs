//! End-to-end comparison pipeline.

use selection_api::ComparisonConfig;
use selection_spi::{
    CandidateDescriptor, DatasetProvider, EvaluationSummary, Fittable, ModelStore, Prediction,
    Reporter, Result, SelectionError, SplitData,
};

use crate::candidates::build_candidates;
use crate::decompose::BiasVarianceEvaluator;
use crate::evaluate::evaluate_candidates;
use crate::search::HyperparameterSearch;
use crate::select::select_and_persist;

/// Everything a comparison run produced: held-out predictions of the
/// surviving candidates, the failures that were skipped, the bias/variance
/// summary, and the selected winner.
#[derive(Debug, Clone)]
pub struct ComparisonReport {
    pub dataset: String,
    pub predictions: Vec<Prediction>,
    /// Candidates that failed fit or predict, as `(label, reason)` pairs.
    pub failures: Vec<(String, String)>,
    pub summary: EvaluationSummary,
    pub winner: String,
    /// Index of the winner within `predictions` / `summary`.
    pub winner_index: usize,
}

/// Orchestrates one descriptor's full comparison: hyperparameter search,
/// candidate set construction, held-out evaluation, bias/variance
/// decomposition and winner persistence.
///
/// A failing candidate is dropped with its reason recorded; the run only
/// aborts when no candidate survives.
#[derive(Debug, Clone, Default)]
pub struct ModelComparison {
    config: ComparisonConfig,
}

impl ModelComparison {
    pub fn new(config: ComparisonConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ComparisonConfig {
        &self.config
    }

    /// Compare an estimator descriptor on a chronologically split dataset.
    pub fn compare_estimator<P, M, S, R>(
        &self,
        provider: &P,
        descriptor: &CandidateDescriptor<M>,
        store: &S,
        reporter: &R,
    ) -> Result<ComparisonReport>
    where
        P: DatasetProvider,
        M: Fittable + Clone,
        S: ModelStore<M>,
        R: Reporter,
    {
        let dataset = provider.name().to_string();
        let data = provider.split(false)?;
        self.run(&dataset, data, descriptor, store, reporter)
    }

    /// Compare a classifier descriptor. Columns named in `leak_features` are
    /// removed first (features that would reveal the label), then the target
    /// is binary-encoded: strictly positive becomes 1.0, everything else 0.0.
    pub fn compare_classifier<P, M, S, R>(
        &self,
        provider: &mut P,
        descriptor: &CandidateDescriptor<M>,
        store: &S,
        reporter: &R,
        leak_features: &[&str],
    ) -> Result<ComparisonReport>
    where
        P: DatasetProvider,
        M: Fittable + Clone,
        S: ModelStore<M>,
        R: Reporter,
    {
        for column in leak_features {
            provider.drop_column(column)?;
        }
        let target = provider.target().to_string();
        provider.apply(&target, &|value| if value > 0.0 { 1.0 } else { 0.0 })?;

        let dataset = provider.name().to_string();
        let data = provider.split(false)?;
        self.run(&dataset, data, descriptor, store, reporter)
    }

    fn run<M, S, R>(
        &self,
        dataset: &str,
        data: SplitData,
        descriptor: &CandidateDescriptor<M>,
        store: &S,
        reporter: &R,
    ) -> Result<ComparisonReport>
    where
        M: Fittable + Clone,
        S: ModelStore<M>,
        R: Reporter,
    {
        log::info!(
            "comparing '{}' ({}) on '{dataset}': {} train rows, {} test rows",
            descriptor.fullname(),
            descriptor.role(),
            data.y_train.len(),
            data.y_test.len()
        );

        let search = HyperparameterSearch::from_config(&self.config);
        let outcome = search.run(
            descriptor,
            &data.x_train,
            &data.y_train,
            &self.config.search_method,
        )?;

        let mut candidates = build_candidates(descriptor, outcome, store);
        let results = evaluate_candidates(
            &mut candidates,
            &data.x_train,
            &data.y_train,
            &data.x_test,
            descriptor.role(),
        );

        let mut survivors = Vec::with_capacity(candidates.len());
        let mut predictions = Vec::with_capacity(candidates.len());
        let mut failures = Vec::new();
        for (candidate, result) in candidates.into_iter().zip(results) {
            match result {
                Ok(prediction) => {
                    predictions.push(prediction);
                    survivors.push(candidate);
                }
                Err(SelectionError::Fit { candidate, reason }) => {
                    failures.push((candidate, reason));
                }
                Err(other) => failures.push((candidate.label, other.to_string())),
            }
        }
        if survivors.is_empty() {
            return Err(SelectionError::NoViableCandidates(format!(
                "all {} candidates of '{}' failed",
                failures.len(),
                descriptor.name()
            )));
        }

        reporter.report(&data.y_test, &predictions, dataset)?;

        let evaluator = BiasVarianceEvaluator::from_config(&self.config);
        let summary = evaluator.decompose(
            &survivors,
            &data.x_train,
            &data.y_train,
            &data.x_test,
            &data.y_test,
            descriptor.role(),
        )?;

        let selection = select_and_persist(
            &survivors,
            &summary,
            &data.x_train,
            &data.y_train,
            store,
            &descriptor.storage_key(),
        )?;

        Ok(ComparisonReport {
            dataset: dataset.to_string(),
            predictions,
            failures,
            summary,
            winner: selection.label,
            winner_index: selection.index,
        })
    }
}
