//! Model comparison and selection pipeline.
//!
//! Implements the core of the comparison run: hyperparameter search under an
//! expanding-window cross-validation scheme, candidate-set construction,
//! fit/predict evaluation, resampling-based bias/variance decomposition, and
//! arg-min selection with persistence of the winning unit.

// Re-export the consumer API (which includes the SPI surface)
pub use selection_api::*;

pub mod candidates;
pub mod decompose;
pub mod evaluate;
pub mod metrics;
pub mod pipeline;
pub mod report;
pub mod search;
pub mod select;
pub mod splitter;
pub mod store;

pub use candidates::{build_candidates, DEFAULT_LABEL, RECORDED_LABEL, TUNED_LABEL};
pub use decompose::BiasVarianceEvaluator;
pub use evaluate::{clip_non_negative, evaluate_candidates};
pub use pipeline::{ComparisonReport, ModelComparison};
pub use report::LogReporter;
pub use search::HyperparameterSearch;
pub use select::{select_and_persist, SelectionReport};
pub use splitter::{ExpandingWindowSplit, ValidationSplit};
pub use store::JsonModelStore;
