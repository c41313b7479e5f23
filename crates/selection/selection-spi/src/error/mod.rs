//! Error types for the selection stack.

mod selection_error;

pub use selection_error::SelectionError;
