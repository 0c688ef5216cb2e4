use linguazoo_types::{AnimalCollection, AnimalRecord};

use crate::StoreError;

/// Serialize the full collection to a single human-diffable document.
/// Same shape as the store file, so exports can be re-imported anywhere.
pub fn export_document(collection: &AnimalCollection) -> String {
    // Vec<AnimalRecord> always serializes.
    serde_json::to_string_pretty(collection).unwrap_or_else(|_| "[]".to_string())
}

/// Parse an exported document back into a collection. The whole document
/// replaces the collection; callers confirm with the user first.
pub fn import_document(document: &str) -> Result<AnimalCollection, StoreError> {
    let value: serde_json::Value = serde_json::from_str(document)
        .map_err(|e| StoreError::InvalidDocument(e.to_string()))?;

    if !value.is_array() {
        return Err(StoreError::InvalidDocument(
            "expected a sequence of animal records".to_string(),
        ));
    }

    let records: Vec<AnimalRecord> = serde_json::from_value(value)
        .map_err(|e| StoreError::InvalidDocument(e.to_string()))?;

    Ok(AnimalCollection::new(records))
}
