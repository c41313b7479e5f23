//! Columnar table with a designated target column.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use selection_spi::{DatasetProvider, Result, SelectionError, SplitData};

/// A tabular dataset whose rows are in chronological order.
///
/// Feature columns and the target column are stored separately; column
/// transforms and drops act in place. The train/test split is chronological
/// unless shuffling is requested explicitly, in which case a seeded
/// permutation keeps the split reproducible.
#[derive(Debug, Clone)]
pub struct TableFrame {
    name: String,
    target: String,
    columns: Vec<String>,
    rows: Vec<Vec<f64>>,
    targets: Vec<f64>,
    train_ratio: f64,
    seed: u64,
}

impl TableFrame {
    /// Build a frame from named columns; `target` names the column used as
    /// the label, the rest become features. All columns must share a length.
    pub fn from_columns(
        name: &str,
        target: &str,
        columns: Vec<(String, Vec<f64>)>,
    ) -> Result<Self> {
        let length = columns
            .first()
            .map(|(_, values)| values.len())
            .unwrap_or(0);
        for (column, values) in &columns {
            if values.len() != length {
                return Err(SelectionError::Shape(format!(
                    "column '{column}' has {} rows, expected {length}",
                    values.len()
                )));
            }
        }

        let mut names = Vec::new();
        let mut features: Vec<Vec<f64>> = Vec::new();
        let mut targets: Option<Vec<f64>> = None;
        for (column, values) in columns {
            if column == target {
                targets = Some(values);
            } else {
                names.push(column);
                features.push(values);
            }
        }
        let targets = targets.ok_or_else(|| SelectionError::UnknownColumn(target.to_string()))?;

        let rows = (0..length)
            .map(|row| features.iter().map(|column| column[row]).collect())
            .collect();

        Ok(Self {
            name: name.to_string(),
            target: target.to_string(),
            columns: names,
            rows,
            targets,
            train_ratio: 0.8,
            seed: 0,
        })
    }

    /// Set the training partition ratio, clamped to (0.1, 0.9).
    pub fn train_ratio(mut self, ratio: f64) -> Self {
        self.train_ratio = ratio.clamp(0.1, 0.9);
        self
    }

    /// Set the seed used by shuffled splits.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Binary-encode the target in place: strictly positive values become
    /// 1.0, everything else 0.0.
    pub fn binary_encode_target(&mut self) {
        for value in &mut self.targets {
            *value = if *value > 0.0 { 1.0 } else { 0.0 };
        }
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    fn column_index(&self, name: &str) -> Result<usize> {
        self.columns
            .iter()
            .position(|column| column == name)
            .ok_or_else(|| SelectionError::UnknownColumn(name.to_string()))
    }
}

impl DatasetProvider for TableFrame {
    fn name(&self) -> &str {
        &self.name
    }

    fn target(&self) -> &str {
        &self.target
    }

    fn split(&self, shuffle: bool) -> Result<SplitData> {
        let n = self.len();
        let train_len = (n as f64 * self.train_ratio) as usize;
        if train_len == 0 || train_len == n {
            return Err(SelectionError::InsufficientData {
                required: 2,
                got: n,
            });
        }

        let order: Vec<usize> = if shuffle {
            let mut indices: Vec<usize> = (0..n).collect();
            indices.shuffle(&mut StdRng::seed_from_u64(self.seed));
            indices
        } else {
            (0..n).collect()
        };

        let take = |range: &[usize]| -> (Vec<Vec<f64>>, Vec<f64>) {
            let x = range.iter().map(|&i| self.rows[i].clone()).collect();
            let y = range.iter().map(|&i| self.targets[i]).collect();
            (x, y)
        };
        let (x_train, y_train) = take(&order[..train_len]);
        let (x_test, y_test) = take(&order[train_len..]);

        Ok(SplitData {
            x_train,
            x_test,
            y_train,
            y_test,
        })
    }

    fn drop_column(&mut self, name: &str) -> Result<()> {
        let index = self.column_index(name)?;
        self.columns.remove(index);
        for row in &mut self.rows {
            row.remove(index);
        }
        Ok(())
    }

    fn apply(&mut self, column: &str, transform: &dyn Fn(f64) -> f64) -> Result<()> {
        if column == self.target {
            for value in &mut self.targets {
                *value = transform(*value);
            }
            return Ok(());
        }
        let index = self.column_index(column)?;
        for row in &mut self.rows {
            row[index] = transform(row[index]);
        }
        Ok(())
    }
}
