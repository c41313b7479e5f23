//! Hyperparameter values, sets, and search spaces.

use serde::{Deserialize, Serialize};

use crate::error::SelectionError;

/// A single hyperparameter value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ParamValue {
    Float(f64),
    Int(i64),
    Flag(bool),
    Text(String),
}

impl ParamValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ParamValue::Float(v) => Some(*v),
            ParamValue::Int(v) => Some(*v as f64),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ParamValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ParamValue::Flag(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::Text(v) => Some(v),
            _ => None,
        }
    }
}

impl std::fmt::Display for ParamValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamValue::Float(v) => write!(f, "{v}"),
            ParamValue::Int(v) => write!(f, "{v}"),
            ParamValue::Flag(v) => write!(f, "{v}"),
            ParamValue::Text(v) => write!(f, "{v}"),
        }
    }
}

/// A named collection of hyperparameter values, as applied to a unit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParamSet {
    entries: Vec<(String, ParamValue)>,
}

impl ParamSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insertion; later values for the same name win.
    pub fn with(mut self, name: &str, value: ParamValue) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: &str, value: ParamValue) {
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| n == name) {
            entry.1 = value;
        } else {
            self.entries.push((name.to_string(), value));
        }
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Display for ParamSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (name, value) in &self.entries {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{name}={value}")?;
            first = false;
        }
        Ok(())
    }
}

/// Declared hyperparameter domains for a candidate unit.
///
/// Dimensions are ordered; the Cartesian product is enumerable in
/// mixed-radix order, which makes grid search deterministic and lets a
/// randomised search draw uniformly by index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchSpace {
    dims: Vec<(String, Vec<ParamValue>)>,
}

impl SearchSpace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a dimension with its enumerated domain.
    pub fn dim(mut self, name: &str, values: Vec<ParamValue>) -> Self {
        self.dims.push((name.to_string(), values));
        self
    }

    pub fn dims(&self) -> &[(String, Vec<ParamValue>)] {
        &self.dims
    }

    pub fn is_empty(&self) -> bool {
        self.dims.is_empty()
    }

    /// Validate that no dimension has an empty domain.
    pub fn validate(&self) -> Result<(), SelectionError> {
        for (name, values) in &self.dims {
            if values.is_empty() {
                return Err(SelectionError::InvalidSearchSpace(format!(
                    "dimension '{name}' has an empty domain"
                )));
            }
        }
        Ok(())
    }

    /// Total number of parameter combinations (1 for an empty space).
    pub fn combinations(&self) -> usize {
        self.dims
            .iter()
            .map(|(_, values)| values.len())
            .product::<usize>()
            .max(1)
    }

    /// Decode combination `index` (mixed-radix over the dimension domains).
    pub fn at(&self, index: usize) -> ParamSet {
        let mut set = ParamSet::new();
        let mut remainder = index;
        for (name, values) in self.dims.iter().rev() {
            if values.is_empty() {
                continue;
            }
            let value = values[remainder % values.len()].clone();
            set.insert(name, value);
            remainder /= values.len();
        }
        set
    }
}
