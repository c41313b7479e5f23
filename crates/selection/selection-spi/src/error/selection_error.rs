//! Selection error types.

use thiserror::Error;

/// Errors that can occur during a model comparison run.
#[derive(Error, Debug)]
pub enum SelectionError {
    /// The requested search strategy is not recognised.
    #[error("Invalid search strategy '{0}': must be either 'randomised' or 'grid'")]
    InvalidStrategy(String),

    /// A candidate's fit or predict call failed.
    #[error("Candidate '{candidate}' failed during fit/predict: {reason}")]
    Fit { candidate: String, reason: String },

    /// Not enough rows for the requested operation.
    #[error("Insufficient data: required {required} rows, got {got}")]
    InsufficientData { required: usize, got: usize },

    /// A search-space key is not a hyperparameter of the base unit.
    #[error("Unknown hyperparameter '{name}' for unit '{unit}'")]
    UnknownParameter { unit: String, name: String },

    /// A search space is malformed (e.g. an empty domain).
    #[error("Invalid search space: {0}")]
    InvalidSearchSpace(String),

    /// Rows or columns do not line up (ragged columns, width mismatch).
    #[error("Shape mismatch: {0}")]
    Shape(String),

    /// A dataset column was referenced that does not exist.
    #[error("Unknown column '{0}'")]
    UnknownColumn(String),

    /// A unit was asked to predict before being fitted.
    #[error("Unit '{0}' is not fitted")]
    NotFitted(String),

    /// Numerical computation error inside a unit.
    #[error("Numerical error: {0}")]
    Numerical(String),

    /// Every candidate in the comparison failed.
    #[error("No viable candidates: {0}")]
    NoViableCandidates(String),

    /// Persistence collaborator failure.
    #[error("Model store failure: {0}")]
    Store(String),

    /// Underlying I/O failure.
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),
}
