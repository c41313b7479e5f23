//! Data model for the comparison pipeline.

mod candidate;
mod param;
mod role;
mod summary;

pub use candidate::{Candidate, CandidateDescriptor, Prediction, SearchOutcome, StorageKey};
pub use param::{ParamSet, ParamValue, SearchSpace};
pub use role::Role;
pub use summary::{EvaluationSummary, SummaryEntry};
