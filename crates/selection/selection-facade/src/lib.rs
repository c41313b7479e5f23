//! Model Selection Facade
//!
//! High-level API for the model comparison and selection pipeline.
//! Re-exports all public types from the selection stack for convenient usage.
//!
//! # Example
//!
//! ```ignore
//! use selection_facade::prelude::*;
//!
//! let config = ComparisonConfig::default().search_method("grid").seed(42);
//! let comparison = ModelComparison::new(config);
//! let report = comparison.compare_estimator(&frame, &descriptor, &store, &reporter)?;
//! println!("Best candidate: {}", report.winner);
//! ```

// Re-export everything from core (which includes API and SPI)
pub use selection_core::*;

/// Prelude module for convenient imports
pub mod prelude {
    // Traits
    pub use selection_spi::{DatasetProvider, Fittable, ModelStore, Reporter};

    // Configuration types
    pub use selection_api::{ComparisonConfig, SearchStrategy, StorageLayout, CONFIG_VERSION};

    // Error and model types
    pub use selection_spi::{
        Candidate, CandidateDescriptor, EvaluationSummary, ParamSet, ParamValue, Prediction,
        Result, Role, SearchOutcome, SearchSpace, SelectionError, SplitData, StorageKey,
        SummaryEntry,
    };

    // Implementations
    pub use selection_core::{
        build_candidates, clip_non_negative, select_and_persist, BiasVarianceEvaluator,
        ComparisonReport, ExpandingWindowSplit, HyperparameterSearch, JsonModelStore, LogReporter,
        ModelComparison, SelectionReport,
    };
}
