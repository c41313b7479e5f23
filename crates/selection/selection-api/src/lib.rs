//! Model Selection Consumer API
//!
//! Configuration types and DTOs for comparison-pipeline consumers.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// Re-export SPI types
pub use selection_spi::{
    Candidate, CandidateDescriptor, DatasetProvider, EvaluationSummary, Fittable, ModelStore,
    ParamSet, ParamValue, Prediction, Reporter, Result, Role, SearchOutcome, SearchSpace,
    SelectionError, SplitData, StorageKey, SummaryEntry,
};

/// Current configuration schema version.
pub const CONFIG_VERSION: u32 = 1;

/// Hyperparameter search strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SearchStrategy {
    /// Draw parameter sets with replacement from the declared domains.
    #[default]
    Randomised,
    /// Evaluate the full Cartesian product of the declared domains.
    Grid,
}

impl FromStr for SearchStrategy {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "randomised" => Ok(SearchStrategy::Randomised),
            "grid" => Ok(SearchStrategy::Grid),
            other => Err(SelectionError::InvalidStrategy(other.to_string())),
        }
    }
}

impl std::fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchStrategy::Randomised => f.write_str("randomised"),
            SearchStrategy::Grid => f.write_str("grid"),
        }
    }
}

/// Configuration for a comparison run.
///
/// All updates go through the validated builder-style setters; components
/// receive the struct by reference and never mutate it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonConfig {
    /// Schema version of this struct.
    pub version: u32,
    /// Search strategy name: "randomised" or "grid". Kept as the external
    /// string so an invalid value fails fast inside the search engine.
    pub search_method: String,
    /// Number of expanding-window cross-validation folds.
    pub cv_folds: usize,
    /// Parameter sets drawn by the randomised strategy.
    pub search_iterations: usize,
    /// Bootstrap iterations for the bias/variance decomposition.
    pub resamples: usize,
    /// Portion of rows assigned to the training partition.
    pub train_ratio: f64,
    /// Seed threaded through the search engine and the decomposition.
    pub seed: u64,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            search_method: "randomised".to_string(),
            cv_folds: 10,
            search_iterations: 1000,
            resamples: 10,
            train_ratio: 0.8,
            seed: 0,
        }
    }
}

impl ComparisonConfig {
    /// Set the search method string ("randomised" or "grid"); validity is
    /// checked when the search runs.
    pub fn search_method(mut self, method: &str) -> Self {
        self.search_method = method.to_string();
        self
    }

    /// Set the number of cross-validation folds (at least 2).
    pub fn cv_folds(mut self, folds: usize) -> Self {
        self.cv_folds = folds.max(2);
        self
    }

    /// Set the randomised-search draw count (at least 1).
    pub fn search_iterations(mut self, iterations: usize) -> Self {
        self.search_iterations = iterations.max(1);
        self
    }

    /// Set the bootstrap iteration count (at least 1).
    pub fn resamples(mut self, resamples: usize) -> Self {
        self.resamples = resamples.max(1);
        self
    }

    /// Set the training partition ratio, clamped to (0.1, 0.9).
    pub fn train_ratio(mut self, ratio: f64) -> Self {
        self.train_ratio = ratio.clamp(0.1, 0.9);
        self
    }

    /// Set the random seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Maps a root directory to the model and results locations of a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageLayout {
    pub root: PathBuf,
    pub models_folder: String,
    pub results_folder: String,
}

impl StorageLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            models_folder: "models".to_string(),
            results_folder: "results".to_string(),
        }
    }

    pub fn models_dir(&self) -> PathBuf {
        self.root.join(&self.models_folder)
    }

    /// Per-descriptor results directory, `{role}_{name}` under the results
    /// folder.
    pub fn results_dir(&self, key: &StorageKey) -> PathBuf {
        self.root
            .join(&self.results_folder)
            .join(format!("{}_{}", key.role.tag(), key.name))
    }

    pub fn model_path(&self, key: &StorageKey) -> PathBuf {
        self.models_dir().join(key.filename())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}
