//! Winner selection and persistence.

use selection_spi::{
    Candidate, EvaluationSummary, Fittable, ModelStore, Result, SelectionError, StorageKey,
};

/// The selected candidate, refitted on the full training partition.
#[derive(Debug, Clone)]
pub struct SelectionReport<M> {
    pub label: String,
    pub index: usize,
    pub loss: f64,
    pub unit: M,
}

/// Pick the minimum-loss candidate, refit it on the full training partition
/// and persist it under `key`, overwriting any prior model.
///
/// Exact loss ties break to the earliest candidate, so a rerun of the same
/// inputs selects the same winner.
pub fn select_and_persist<M, S>(
    candidates: &[Candidate<M>],
    summary: &EvaluationSummary,
    x_train: &[Vec<f64>],
    y_train: &[f64],
    store: &S,
    key: &StorageKey,
) -> Result<SelectionReport<M>>
where
    M: Fittable + Clone,
    S: ModelStore<M>,
{
    let index = summary.best_index().ok_or_else(|| {
        SelectionError::NoViableCandidates("evaluation summary is empty".to_string())
    })?;
    let candidate = candidates.get(index).ok_or_else(|| {
        SelectionError::NoViableCandidates(format!(
            "summary entry {index} has no matching candidate"
        ))
    })?;
    let entry = &summary.entries[index];

    let mut unit = candidate.unit.clone();
    unit.fit(x_train, y_train)?;
    store.save(key, &unit)?;

    log::info!(
        "selected '{}' (loss {:.6}, bias {:.6}, variance {:.6}), persisted at '{key}'",
        candidate.label,
        entry.loss,
        entry.bias,
        entry.variance
    );

    Ok(SelectionReport {
        label: candidate.label.clone(),
        index,
        loss: entry.loss,
        unit,
    })
}
