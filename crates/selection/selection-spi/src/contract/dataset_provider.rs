//! Dataset provider contract.

use crate::Result;

/// Chronologically ordered train/test partitions of a tabular dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitData {
    pub x_train: Vec<Vec<f64>>,
    pub x_test: Vec<Vec<f64>>,
    pub y_train: Vec<f64>,
    pub y_test: Vec<f64>,
}

/// Supplies ordered train/test partitions and column transforms.
///
/// Implemented by the external dataset collaborator; the comparison core
/// only consumes this narrow surface.
pub trait DatasetProvider {
    /// Dataset display name.
    fn name(&self) -> &str;

    /// Target column name.
    fn target(&self) -> &str;

    /// Partition into train/test. With `shuffle == false` the split is
    /// chronological: every test row comes after every training row.
    fn split(&self, shuffle: bool) -> Result<SplitData>;

    /// Remove a feature column by name.
    fn drop_column(&mut self, name: &str) -> Result<()>;

    /// Apply an elementwise transform to the named column.
    fn apply(&mut self, column: &str, transform: &dyn Fn(f64) -> f64) -> Result<()>;
}
