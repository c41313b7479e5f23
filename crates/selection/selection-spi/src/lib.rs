//! Model Selection Service Provider Interface
//!
//! Defines traits and types for comparing candidate predictive models:
//! - Fittable units (opaque fit/predict models)
//! - Dataset providers (chronologically ordered tabular data)
//! - Model stores (persistence of the winning unit)
//! - Reporters (analysis of held-out predictions)

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at the crate root for convenience
pub use contract::{DatasetProvider, Fittable, ModelStore, Reporter, SplitData};
pub use error::SelectionError;
pub use model::{
    Candidate, CandidateDescriptor, EvaluationSummary, ParamSet, ParamValue, Prediction, Role,
    SearchOutcome, SearchSpace, StorageKey, SummaryEntry,
};

/// Result type for selection operations.
pub type Result<T> = std::result::Result<T, SelectionError>;
