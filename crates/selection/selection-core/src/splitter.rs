//! Expanding-window cross-validation splitter.

use selection_spi::{Result, SelectionError};

/// One fold of the expanding-window scheme. The training block always starts
/// at row 0; validation rows follow it immediately, so every validation row
/// is strictly later in time than every training row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationSplit {
    pub train_start: usize,
    pub train_end: usize,
    pub test_start: usize,
    pub test_end: usize,
}

/// Sequence-respecting cross-validator.
///
/// Partitions `n` chronologically ordered rows into `folds` contiguous
/// validation blocks of `n / (folds + 1)` rows each; fold *k* trains on
/// everything before its validation block. Any remainder rows are absorbed
/// by the first training block.
#[derive(Debug, Clone)]
pub struct ExpandingWindowSplit {
    folds: usize,
}

impl ExpandingWindowSplit {
    pub fn new(folds: usize) -> Self {
        Self {
            folds: folds.max(1),
        }
    }

    pub fn folds(&self) -> usize {
        self.folds
    }

    pub fn splits(&self, data_len: usize) -> Result<Vec<ValidationSplit>> {
        if data_len < self.folds + 1 {
            return Err(SelectionError::InsufficientData {
                required: self.folds + 1,
                got: data_len,
            });
        }

        let test_size = data_len / (self.folds + 1);
        let first_test = data_len - self.folds * test_size;

        let mut splits = Vec::with_capacity(self.folds);
        for fold in 0..self.folds {
            let test_start = first_test + fold * test_size;
            splits.push(ValidationSplit {
                train_start: 0,
                train_end: test_start,
                test_start,
                test_end: test_start + test_size,
            });
        }
        Ok(splits)
    }
}
