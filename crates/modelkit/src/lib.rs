//! # modelkit
//!
//! Reference trainable units for comparison runs: a ridge regressor, a
//! k-nearest-neighbours regressor and a ridge classifier, each standardized
//! through [`ScaledUnit`] and wrapped in the serializable [`ModelUnit`] enum,
//! plus descriptor constructors with their default search spaces.

mod catalog;
mod classifier;
mod knn;
mod ridge;
mod scaler;
mod solve;
mod unit;

pub use catalog::{knn_regressor, ridge_classifier, ridge_regressor};
pub use classifier::RidgeClassifier;
pub use knn::KnnRegressor;
pub use ridge::RidgeRegressor;
pub use scaler::ScaledUnit;
pub use unit::ModelUnit;
