//! Aggregated bias/variance evaluation results.

use serde::{Deserialize, Serialize};

/// Per-candidate aggregate from the bias/variance decomposition.
///
/// For estimators `loss` is the expected squared loss, split into `bias`
/// (squared bias of the mean prediction) and `variance`. For classifiers
/// `loss` is the average 0-1 error rate, with the bias/variance terms taken
/// against the modal prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryEntry {
    pub label: String,
    pub loss: f64,
    pub bias: f64,
    pub variance: f64,
}

/// Ordered per-candidate evaluation aggregates; the selection rule consumes
/// this structure only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvaluationSummary {
    pub entries: Vec<SummaryEntry>,
}

impl EvaluationSummary {
    pub fn new(entries: Vec<SummaryEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of the minimum-loss entry; exact ties break to the earliest
    /// index so repeated runs are reproducible. Non-finite losses can never
    /// win; `None` when no entry has a finite loss.
    pub fn best_index(&self) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (index, entry) in self.entries.iter().enumerate() {
            if !entry.loss.is_finite() {
                continue;
            }
            match best {
                Some((_, loss)) if entry.loss >= loss => {}
                _ => best = Some((index, entry.loss)),
            }
        }
        best.map(|(index, _)| index)
    }

    pub fn best(&self) -> Option<&SummaryEntry> {
        self.best_index().map(|index| &self.entries[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(label: &str, loss: f64) -> SummaryEntry {
        SummaryEntry {
            label: label.to_string(),
            loss,
            bias: 0.0,
            variance: 0.0,
        }
    }

    #[test]
    fn test_best_index_argmin() {
        let summary =
            EvaluationSummary::new(vec![entry("a", 3.0), entry("b", 1.0), entry("c", 2.0)]);
        assert_eq!(summary.best_index(), Some(1));
        assert_eq!(summary.best().map(|e| e.label.as_str()), Some("b"));
    }

    #[test]
    fn test_best_index_ties_break_earliest() {
        let summary =
            EvaluationSummary::new(vec![entry("a", 1.0), entry("b", 1.0), entry("c", 1.0)]);
        assert_eq!(summary.best_index(), Some(0));
    }

    #[test]
    fn test_best_index_empty() {
        assert_eq!(EvaluationSummary::default().best_index(), None);
    }

    #[test]
    fn test_best_index_skips_non_finite_losses() {
        let summary = EvaluationSummary::new(vec![
            entry("a", 1.0),
            entry("b", f64::NAN),
            entry("c", f64::INFINITY),
        ]);
        assert_eq!(summary.best_index(), Some(0));

        let trailing_nan = EvaluationSummary::new(vec![entry("a", 1.0), entry("b", f64::NAN)]);
        assert_eq!(trailing_nan.best_index(), Some(0));
    }

    #[test]
    fn test_best_index_none_without_finite_losses() {
        let summary =
            EvaluationSummary::new(vec![entry("a", f64::NAN), entry("b", f64::INFINITY)]);
        assert_eq!(summary.best_index(), None);
        assert!(summary.best().is_none());
    }
}
