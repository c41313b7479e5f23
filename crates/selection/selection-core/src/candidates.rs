//! Candidate set construction.

use selection_spi::{Candidate, CandidateDescriptor, Fittable, ModelStore, SearchOutcome};

pub const DEFAULT_LABEL: &str = "Default";
pub const TUNED_LABEL: &str = "Tuned";
pub const RECORDED_LABEL: &str = "Recorded Best";

/// Assemble the ordered candidate sequence: the untouched default, the
/// search-tuned unit, and the previously persisted best when one exists.
///
/// A missing persisted model is not an error; an unreadable one is recovered
/// the same way, with a warning.
pub fn build_candidates<M, S>(
    descriptor: &CandidateDescriptor<M>,
    outcome: SearchOutcome<M>,
    store: &S,
) -> Vec<Candidate<M>>
where
    M: Fittable + Clone,
    S: ModelStore<M>,
{
    let mut candidates = vec![
        Candidate::new(DEFAULT_LABEL, descriptor.base().clone()),
        Candidate::new(TUNED_LABEL, outcome.best_unit),
    ];

    let key = descriptor.storage_key();
    if store.exists(&key) {
        match store.load(&key) {
            Ok(unit) => candidates.push(Candidate::new(RECORDED_LABEL, unit)),
            Err(error) => {
                log::warn!("could not load recorded model at '{key}': {error}");
            }
        }
    }

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use selection_spi::{
        ParamSet, ParamValue, Result, Role, SearchSpace, SelectionError, StorageKey,
    };
    use std::cell::RefCell;

    #[derive(Debug, Clone, PartialEq)]
    struct StubUnit {
        c: f64,
    }

    impl Fittable for StubUnit {
        fn unit_name(&self) -> &'static str {
            "StubUnit"
        }

        fn fit(&mut self, _x: &[Vec<f64>], _y: &[f64]) -> Result<()> {
            Ok(())
        }

        fn predict(&self, x: &[Vec<f64>]) -> Result<Vec<f64>> {
            Ok(vec![self.c; x.len()])
        }

        fn apply_params(&mut self, params: &ParamSet) -> Result<()> {
            if let Some(value) = params.get("c") {
                self.c = value.as_f64().unwrap_or(self.c);
            }
            Ok(())
        }
    }

    /// In-memory store holding at most one unit.
    struct MemoryStore {
        content: RefCell<Option<StubUnit>>,
        poisoned: bool,
    }

    impl MemoryStore {
        fn empty() -> Self {
            Self {
                content: RefCell::new(None),
                poisoned: false,
            }
        }

        fn with(unit: StubUnit) -> Self {
            Self {
                content: RefCell::new(Some(unit)),
                poisoned: false,
            }
        }

        fn poisoned(unit: StubUnit) -> Self {
            Self {
                content: RefCell::new(Some(unit)),
                poisoned: true,
            }
        }
    }

    impl ModelStore<StubUnit> for MemoryStore {
        fn exists(&self, _key: &StorageKey) -> bool {
            self.content.borrow().is_some()
        }

        fn load(&self, _key: &StorageKey) -> Result<StubUnit> {
            if self.poisoned {
                return Err(SelectionError::Store("corrupt payload".to_string()));
            }
            self.content
                .borrow()
                .clone()
                .ok_or_else(|| SelectionError::Store("empty".to_string()))
        }

        fn save(&self, _key: &StorageKey, unit: &StubUnit) -> Result<()> {
            *self.content.borrow_mut() = Some(unit.clone());
            Ok(())
        }
    }

    fn descriptor() -> CandidateDescriptor<StubUnit> {
        CandidateDescriptor::new(
            "SU",
            "Stub Unit",
            Role::Estimator,
            SearchSpace::new().dim("c", vec![ParamValue::Float(1.0)]),
            StubUnit { c: 0.0 },
        )
        .unwrap()
    }

    fn outcome() -> SearchOutcome<StubUnit> {
        SearchOutcome {
            best_unit: StubUnit { c: 2.0 },
            best_score: 0.1,
            best_params: ParamSet::new().with("c", ParamValue::Float(2.0)),
        }
    }

    #[test]
    fn test_two_candidates_without_recorded_model() {
        let candidates = build_candidates(&descriptor(), outcome(), &MemoryStore::empty());
        let labels: Vec<&str> = candidates.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec![DEFAULT_LABEL, TUNED_LABEL]);
    }

    #[test]
    fn test_three_candidates_with_recorded_model() {
        let store = MemoryStore::with(StubUnit { c: 9.0 });
        let candidates = build_candidates(&descriptor(), outcome(), &store);
        let labels: Vec<&str> = candidates.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec![DEFAULT_LABEL, TUNED_LABEL, RECORDED_LABEL]);
        assert_eq!(candidates[2].unit, StubUnit { c: 9.0 });
    }

    #[test]
    fn test_default_is_a_clone_of_base() {
        let descriptor = descriptor();
        let candidates = build_candidates(&descriptor, outcome(), &MemoryStore::empty());
        assert_eq!(candidates[0].unit, *descriptor.base());
        assert_eq!(candidates[1].unit, StubUnit { c: 2.0 });
    }

    #[test]
    fn test_unreadable_recorded_model_is_omitted() {
        let store = MemoryStore::poisoned(StubUnit { c: 9.0 });
        let candidates = build_candidates(&descriptor(), outcome(), &store);
        assert_eq!(candidates.len(), 2);
    }
}
