//! # dataset
//!
//! Columnar, time-ordered tabular data for comparison runs. [`TableFrame`]
//! keeps rows in chronological order and implements the dataset provider
//! contract consumed by the selection pipeline.

mod frame;

pub use frame::TableFrame;
