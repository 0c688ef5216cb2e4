use std::fs;
use std::path::{Path, PathBuf};

use linguazoo_types::AnimalCollection;

use crate::portable::{export_document, import_document};
use crate::{CollectionStore, StoreError};

/// Flat JSON file holding the whole collection as one array. Saves go
/// through a temp file and rename, so a reader never observes a partial
/// write.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CollectionStore for JsonFileStore {
    fn load(&self) -> Result<AnimalCollection, StoreError> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no collection file yet");
            return Ok(AnimalCollection::default());
        }

        let document = fs::read_to_string(&self.path)?;
        let collection = import_document(&document)?;

        tracing::debug!(
            path = %self.path.display(),
            count = collection.len(),
            "loaded collection"
        );

        Ok(collection)
    }

    fn save(&self, collection: &AnimalCollection) -> Result<(), StoreError> {
        let document = export_document(collection);

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, document)?;
        fs::rename(&tmp, &self.path)?;

        tracing::debug!(
            path = %self.path.display(),
            count = collection.len(),
            "saved collection"
        );

        Ok(())
    }
}
