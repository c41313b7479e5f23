//! Persistence collaborator contract.

use crate::model::StorageKey;
use crate::Result;

/// Externally-owned storage for a single persisted unit per key.
///
/// Written exactly once per successful run, by the selector; read at the
/// start of a run by the candidate set builder. Absence of a model is not an
/// error.
pub trait ModelStore<M> {
    fn exists(&self, key: &StorageKey) -> bool;

    fn load(&self, key: &StorageKey) -> Result<M>;

    /// Save, overwriting any prior model at `key`.
    fn save(&self, key: &StorageKey, unit: &M) -> Result<()>;
}
