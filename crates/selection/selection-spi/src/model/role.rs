//! Candidate role tag.

use serde::{Deserialize, Serialize};

/// Whether a candidate predicts a continuous quantity or a discrete label.
///
/// Role-specific behaviour (non-negativity clipping vs. binary target
/// encoding) dispatches on this tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Continuous regression target (e.g. a price); predictions are clipped
    /// to be non-negative.
    Estimator,
    /// Binary classification target; predictions are left unmodified.
    Classifier,
}

impl Role {
    /// Short lowercase tag used in storage paths and log lines.
    pub fn tag(&self) -> &'static str {
        match self {
            Role::Estimator => "estimator",
            Role::Classifier => "classifier",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}
