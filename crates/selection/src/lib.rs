//! # selection
//!
//! Model comparison and selection pipeline for time-ordered tabular data:
//! hyperparameter search under expanding-window cross-validation, candidate
//! set construction, held-out evaluation with bias/variance decomposition,
//! and arg-min selection with persistence of the winning unit.

pub use selection_facade::*;
