//! JSON file-backed model store.

use std::fs;
use std::path::{Path, PathBuf};

use selection_api::StorageLayout;
use selection_spi::{ModelStore, Result, SelectionError, StorageKey};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Persists one model per [`StorageKey`] as pretty-printed JSON under a
/// single directory, using the key's canonical file name.
#[derive(Debug, Clone)]
pub struct JsonModelStore {
    dir: PathBuf,
}

impl JsonModelStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store rooted at the layout's models directory.
    pub fn from_layout(layout: &StorageLayout) -> Self {
        Self::new(layout.models_dir())
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, key: &StorageKey) -> PathBuf {
        self.dir.join(key.filename())
    }
}

impl<M> ModelStore<M> for JsonModelStore
where
    M: Serialize + DeserializeOwned,
{
    fn exists(&self, key: &StorageKey) -> bool {
        self.path(key).is_file()
    }

    fn load(&self, key: &StorageKey) -> Result<M> {
        let path = self.path(key);
        let payload = fs::read_to_string(&path)?;
        serde_json::from_str(&payload).map_err(|error| {
            SelectionError::Store(format!("could not decode '{}': {error}", path.display()))
        })
    }

    fn save(&self, key: &StorageKey, unit: &M) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let payload = serde_json::to_string_pretty(unit)
            .map_err(|error| SelectionError::Store(format!("could not encode '{key}': {error}")))?;
        fs::write(self.path(key), payload)?;
        Ok(())
    }
}
