use linguazoo_types::AnimalCollection;

pub mod json_file;
pub mod memory;
pub mod portable;
pub mod seed;

pub use self::json_file::JsonFileStore;
pub use self::memory::MemoryStore;
pub use self::portable::{export_document, import_document};
pub use self::seed::seed_collection;

/// Persistence boundary for the animal collection. Load returns the full
/// sequence (empty if nothing was ever saved); save replaces it wholesale.
/// Callers serialize concurrent mutations; there is no merge strategy.
pub trait CollectionStore: Send + Sync {
    fn load(&self) -> Result<AnimalCollection, StoreError>;

    fn save(&self, collection: &AnimalCollection) -> Result<(), StoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid collection document: {0}")]
    InvalidDocument(String),
}
