//! Candidate descriptors and per-run artifacts.

use serde::{Deserialize, Serialize};

use crate::contract::Fittable;
use crate::error::SelectionError;
use crate::model::{ParamSet, Role, SearchSpace};

/// Immutable metadata for a trainable unit under comparison.
///
/// The descriptor owns the base unit; the role and search space are fixed at
/// construction. Construction verifies that every search-space key is a
/// hyperparameter the base unit accepts.
#[derive(Debug, Clone)]
pub struct CandidateDescriptor<M> {
    name: String,
    fullname: String,
    role: Role,
    search_space: SearchSpace,
    base: M,
}

impl<M: Fittable + Clone> CandidateDescriptor<M> {
    pub fn new(
        name: &str,
        fullname: &str,
        role: Role,
        search_space: SearchSpace,
        base: M,
    ) -> Result<Self, SelectionError> {
        search_space.validate()?;

        // Probe each declared key against a clone; an unknown key fails here
        // rather than mid-search.
        let mut probe = base.clone();
        for (key, values) in search_space.dims() {
            let singleton = ParamSet::new().with(key, values[0].clone());
            probe.apply_params(&singleton)?;
        }

        Ok(Self {
            name: name.to_string(),
            fullname: fullname.to_string(),
            role,
            search_space,
            base,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fullname(&self) -> &str {
        &self.fullname
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn search_space(&self) -> &SearchSpace {
        &self.search_space
    }

    pub fn base(&self) -> &M {
        &self.base
    }

    /// Storage key identifying this descriptor's persisted model.
    pub fn storage_key(&self) -> StorageKey {
        StorageKey::new(&self.name, self.role)
    }
}

/// A named, fitted-or-fittable model instance under comparison.
#[derive(Debug, Clone)]
pub struct Candidate<M> {
    pub label: String,
    pub unit: M,
}

impl<M> Candidate<M> {
    pub fn new(label: &str, unit: M) -> Self {
        Self {
            label: label.to_string(),
            unit,
        }
    }
}

/// Outcome of a hyperparameter search: the best-found configuration.
#[derive(Debug, Clone)]
pub struct SearchOutcome<M> {
    /// Best unit, refitted on the full training partition.
    pub best_unit: M,
    /// Mean validation score of the best configuration (lower is better).
    pub best_score: f64,
    /// The winning parameter assignment.
    pub best_params: ParamSet,
}

/// Predictions on the held-out partition, aligned index-for-index with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub label: String,
    pub values: Vec<f64>,
}

impl Prediction {
    pub fn new(label: &str, values: Vec<f64>) -> Self {
        Self {
            label: label.to_string(),
            values,
        }
    }
}

/// Key identifying a persisted model: `(name, role)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StorageKey {
    pub name: String,
    pub role: Role,
}

impl StorageKey {
    pub fn new(name: &str, role: Role) -> Self {
        Self {
            name: name.to_string(),
            role,
        }
    }

    /// Canonical file name for this key.
    pub fn filename(&self) -> String {
        format!("{}_{}.json", self.role.tag(), self.name)
    }
}

impl std::fmt::Display for StorageKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.role.tag(), self.name)
    }
}
