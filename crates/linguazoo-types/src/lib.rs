use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

/// The two languages the game quizzes in. Indonesian is the canonical
/// storage language of the collection; English is the dictionary lookup
/// language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "IND")]
    Indonesian,
    #[serde(rename = "ENG")]
    English,
}

impl Language {
    pub fn other(self) -> Language {
        match self {
            Language::Indonesian => Language::English,
            Language::English => Language::Indonesian,
        }
    }

    /// ISO 639-1 code used by the translation provider.
    pub fn code(self) -> &'static str {
        match self {
            Language::Indonesian => "id",
            Language::English => "en",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Language::Indonesian => "Indonesia",
            Language::English => "English",
        }
    }
}

/// Canonical form used for every equality and duplicate check:
/// trimmed, NFKC-normalized, uppercased.
pub fn canonical_key(word: &str) -> String {
    word.trim().nfkc().collect::<String>().to_uppercase()
}

/// One entry in the persisted collection. Wire field names (`IND`, `ENG`,
/// `clues`) are the original storage schema and must stay stable; fields
/// this version does not know about are carried through `extra` so an
/// export/import round-trip never drops them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimalRecord {
    #[serde(rename = "IND")]
    pub name_id: String,
    #[serde(rename = "ENG")]
    pub name_en: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub clues: Vec<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl AnimalRecord {
    pub fn new(name_id: impl Into<String>, name_en: impl Into<String>) -> Self {
        Self {
            name_id: canonical_key(&name_id.into()),
            name_en: canonical_key(&name_en.into()),
            clues: Vec::new(),
            extra: BTreeMap::new(),
        }
    }

    pub fn name_in(&self, language: Language) -> &str {
        match language {
            Language::Indonesian => &self.name_id,
            Language::English => &self.name_en,
        }
    }
}

/// Ordered collection of animal records. Read-only queries live here;
/// mutation goes through collection commands in linguazoo-core so every
/// change is an explicit (old, command) -> new step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnimalCollection {
    records: Vec<AnimalRecord>,
}

impl AnimalCollection {
    pub fn new(records: Vec<AnimalRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[AnimalRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<AnimalRecord> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Find a record whose name in `language` equals `word` under the
    /// canonical key.
    pub fn find(&self, language: Language, word: &str) -> Option<&AnimalRecord> {
        let key = canonical_key(word);
        self.records
            .iter()
            .find(|r| canonical_key(r.name_in(language)) == key)
    }

    pub fn contains(&self, language: Language, word: &str) -> bool {
        self.find(language, word).is_some()
    }
}

impl FromIterator<AnimalRecord> for AnimalCollection {
    fn from_iter<T: IntoIterator<Item = AnimalRecord>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_key_trims_and_uppercases() {
        assert_eq!(canonical_key("  kucing "), "KUCING");
        assert_eq!(canonical_key("Kuda Nil"), "KUDA NIL");
    }

    #[test]
    fn find_matches_per_language_field() {
        let collection =
            AnimalCollection::new(vec![AnimalRecord::new("KUCING", "CAT")]);
        assert!(collection.contains(Language::Indonesian, "kucing"));
        assert!(collection.contains(Language::English, " Cat "));
        assert!(!collection.contains(Language::Indonesian, "CAT"));
    }

    #[test]
    fn unknown_fields_survive_deserialization() {
        let json = r#"{"IND":"KUCING","ENG":"CAT","emoji":"🐱"}"#;
        let record: AnimalRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.extra["emoji"], "🐱");
        let back = serde_json::to_value(&record).unwrap();
        assert_eq!(back["emoji"], "🐱");
    }
}
