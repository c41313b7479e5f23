//! Log-backed reporting collaborator.

use selection_spi::{Prediction, Reporter, Result, Role};

use crate::metrics::{error_rate, mae, mse};

/// Reports per-candidate held-out accuracy through the log facade.
#[derive(Debug, Clone)]
pub struct LogReporter {
    role: Role,
}

impl LogReporter {
    pub fn new(role: Role) -> Self {
        Self { role }
    }
}

impl Reporter for LogReporter {
    fn report(&self, y_test: &[f64], predictions: &[Prediction], dataset_name: &str) -> Result<()> {
        for prediction in predictions {
            match self.role {
                Role::Estimator => log::info!(
                    "{dataset_name} / '{}': mse {:.6}, mae {:.6}",
                    prediction.label,
                    mse(y_test, &prediction.values),
                    mae(y_test, &prediction.values)
                ),
                Role::Classifier => log::info!(
                    "{dataset_name} / '{}': error rate {:.6}",
                    prediction.label,
                    error_rate(y_test, &prediction.values)
                ),
            }
        }
        Ok(())
    }
}
