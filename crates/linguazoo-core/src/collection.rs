use linguazoo_types::{AnimalCollection, AnimalRecord, Language, canonical_key};

/// One mutation of the collection. Applied as a pure
/// `(old, command) -> new` step; the caller persists the result.
#[derive(Debug, Clone)]
pub enum Command {
    /// Add a new record. Fails on a duplicate canonical key; duplicates
    /// are rejected locally and never re-validated.
    Add(AnimalRecord),
    /// Append a clue to an existing record. Idempotent: re-adding an
    /// existing clue string is a no-op.
    AddClue { name: String, clue: String },
    /// Remove a clue from an existing record.
    RemoveClue { name: String, clue: String },
    /// Delete a record by its Indonesian name.
    Delete(String),
    /// Replace the whole collection (import, seed reset).
    Replace(AnimalCollection),
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CollectionError {
    #[error("\"{0}\" is already in the collection")]
    Duplicate(String),

    #[error("\"{0}\" is not in the collection")]
    NotFound(String),
}

pub fn apply(
    collection: &AnimalCollection,
    command: Command,
) -> Result<AnimalCollection, CollectionError> {
    match command {
        Command::Add(record) => add(collection, record),
        Command::AddClue { name, clue } => {
            with_record(collection, &name, |record| {
                if !record.clues.iter().any(|c| c == &clue) {
                    record.clues.push(clue.clone());
                }
            })
        }
        Command::RemoveClue { name, clue } => {
            with_record(collection, &name, |record| {
                record.clues.retain(|c| c != &clue);
            })
        }
        Command::Delete(name) => delete(collection, &name),
        Command::Replace(next) => Ok(next),
    }
}

fn add(
    collection: &AnimalCollection,
    record: AnimalRecord,
) -> Result<AnimalCollection, CollectionError> {
    if collection.contains(Language::Indonesian, &record.name_id) {
        return Err(CollectionError::Duplicate(record.name_id));
    }

    let mut records = collection.records().to_vec();
    records.push(record);
    Ok(AnimalCollection::new(records))
}

fn delete(
    collection: &AnimalCollection,
    name: &str,
) -> Result<AnimalCollection, CollectionError> {
    let key = canonical_key(name);
    if !collection.contains(Language::Indonesian, &key) {
        return Err(CollectionError::NotFound(key));
    }

    let records = collection
        .records()
        .iter()
        .filter(|r| canonical_key(&r.name_id) != key)
        .cloned()
        .collect();
    Ok(AnimalCollection::new(records))
}

fn with_record(
    collection: &AnimalCollection,
    name: &str,
    mutate: impl Fn(&mut AnimalRecord),
) -> Result<AnimalCollection, CollectionError> {
    let key = canonical_key(name);
    if !collection.contains(Language::Indonesian, &key) {
        return Err(CollectionError::NotFound(key));
    }

    let records = collection
        .records()
        .iter()
        .cloned()
        .map(|mut record| {
            if canonical_key(&record.name_id) == key {
                mutate(&mut record);
            }
            record
        })
        .collect();
    Ok(AnimalCollection::new(records))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> AnimalCollection {
        AnimalCollection::new(vec![
            AnimalRecord::new("KUCING", "CAT"),
            AnimalRecord::new("GAJAH", "ELEPHANT"),
        ])
    }

    #[test]
    fn add_appends_in_order() {
        let next = apply(&base(), Command::Add(AnimalRecord::new("ULAR", "SNAKE"))).unwrap();
        assert_eq!(next.len(), 3);
        assert_eq!(next.records()[2].name_id, "ULAR");
    }

    #[test]
    fn duplicate_add_never_creates_a_second_record() {
        let collection = base();
        let err = apply(
            &collection,
            Command::Add(AnimalRecord::new(" kucing ", "CAT")),
        )
        .unwrap_err();
        assert_eq!(err, CollectionError::Duplicate("KUCING".to_string()));
    }

    #[test]
    fn clue_add_is_idempotent() {
        let clue = "berkaki empat".to_string();
        let once = apply(
            &base(),
            Command::AddClue {
                name: "kucing".to_string(),
                clue: clue.clone(),
            },
        )
        .unwrap();
        let twice = apply(
            &once,
            Command::AddClue {
                name: "KUCING".to_string(),
                clue: clue.clone(),
            },
        )
        .unwrap();

        assert_eq!(twice.records()[0].clues, vec![clue]);
    }

    #[test]
    fn clue_order_is_preserved() {
        let mut collection = base();
        for clue in ["suka ikan", "berkaki empat", "mengeong"] {
            collection = apply(
                &collection,
                Command::AddClue {
                    name: "KUCING".to_string(),
                    clue: clue.to_string(),
                },
            )
            .unwrap();
        }
        assert_eq!(
            collection.records()[0].clues,
            vec!["suka ikan", "berkaki empat", "mengeong"]
        );
    }

    #[test]
    fn remove_clue_deletes_only_that_clue() {
        let collection = apply(
            &base(),
            Command::AddClue {
                name: "KUCING".to_string(),
                clue: "mengeong".to_string(),
            },
        )
        .unwrap();
        let next = apply(
            &collection,
            Command::RemoveClue {
                name: "KUCING".to_string(),
                clue: "mengeong".to_string(),
            },
        )
        .unwrap();
        assert!(next.records()[0].clues.is_empty());
    }

    #[test]
    fn delete_removes_by_canonical_key() {
        let next = apply(&base(), Command::Delete("  gajah ".to_string())).unwrap();
        assert_eq!(next.len(), 1);
        assert_eq!(next.records()[0].name_id, "KUCING");
    }

    #[test]
    fn delete_missing_fails() {
        let err = apply(&base(), Command::Delete("NAGA".to_string())).unwrap_err();
        assert_eq!(err, CollectionError::NotFound("NAGA".to_string()));
    }

    #[test]
    fn replace_swaps_everything() {
        let next = apply(
            &base(),
            Command::Replace(AnimalCollection::default()),
        )
        .unwrap();
        assert!(next.is_empty());
    }
}
