use std::sync::Mutex;

use linguazoo_types::AnimalCollection;

use crate::{CollectionStore, StoreError};

/// In-memory store for tests and dry runs.
#[derive(Default)]
pub struct MemoryStore {
    collection: Mutex<AnimalCollection>,
}

impl MemoryStore {
    pub fn new(collection: AnimalCollection) -> Self {
        Self {
            collection: Mutex::new(collection),
        }
    }
}

impl CollectionStore for MemoryStore {
    fn load(&self) -> Result<AnimalCollection, StoreError> {
        let guard = self.collection.lock().unwrap_or_else(|e| e.into_inner());
        Ok(guard.clone())
    }

    fn save(&self, collection: &AnimalCollection) -> Result<(), StoreError> {
        let mut guard = self.collection.lock().unwrap_or_else(|e| e.into_inner());
        *guard = collection.clone();
        Ok(())
    }
}
