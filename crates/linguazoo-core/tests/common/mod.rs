#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use linguazoo_core::{AnimalClassifier, AnimalValidator, GameEntryResolver};
use linguazoo_dictionary::{DictionaryLookup, LookupError, SenseDefinition};
use linguazoo_translator::{TranslateError, Translator};
use linguazoo_types::{Language, canonical_key};

/// Scripted translator: returns the mapped word, echoes unmapped input,
/// and counts every call.
pub struct MockTranslator {
    mapping: HashMap<String, String>,
    fail: bool,
    calls: AtomicUsize,
}

impl MockTranslator {
    pub fn with_mapping(pairs: &[(&str, &str)]) -> Arc<Self> {
        Arc::new(Self {
            mapping: pairs
                .iter()
                .map(|(from, to)| (canonical_key(from), to.to_string()))
                .collect(),
            fail: false,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            mapping: HashMap::new(),
            fail: true,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Translator for MockTranslator {
    async fn translate(
        &self,
        text: &str,
        _from: Language,
        _to: Language,
    ) -> Result<String, TranslateError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.fail {
            return Err(TranslateError::Provider("connection dropped".to_string()));
        }

        let key = canonical_key(text);
        Ok(self.mapping.get(&key).cloned().unwrap_or(key))
    }
}

/// Scripted dictionary: words not in the table are a confirmed not-found;
/// `failing` simulates a transport-level fault.
pub struct MockDictionary {
    entries: HashMap<String, Vec<SenseDefinition>>,
    fail: bool,
    calls: AtomicUsize,
}

impl MockDictionary {
    pub fn with_entries(entries: &[(&str, &[SenseDefinition])]) -> Arc<Self> {
        Arc::new(Self {
            entries: entries
                .iter()
                .map(|(word, defs)| (canonical_key(word), defs.to_vec()))
                .collect(),
            fail: false,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            entries: HashMap::new(),
            fail: true,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DictionaryLookup for MockDictionary {
    async fn lookup(
        &self,
        word: &str,
        _language: Language,
    ) -> Result<Vec<SenseDefinition>, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.fail {
            return Err(LookupError::Malformed("connection dropped".to_string()));
        }

        self.entries
            .get(&canonical_key(word))
            .cloned()
            .ok_or(LookupError::NotFound)
    }
}

pub fn animal_defs() -> Vec<SenseDefinition> {
    vec![
        SenseDefinition::new("noun", "A small domesticated mammal kept as a pet."),
        SenseDefinition::new("verb", "To move stealthily."),
    ]
}

pub fn plain_defs() -> Vec<SenseDefinition> {
    vec![SenseDefinition::new(
        "noun",
        "A piece of furniture for sitting on.",
    )]
}

pub fn validator(
    translator: Arc<MockTranslator>,
    dictionary: Arc<MockDictionary>,
) -> AnimalValidator {
    AnimalValidator::new(translator, dictionary, AnimalClassifier::default())
}

pub fn resolver(
    translator: Arc<MockTranslator>,
    dictionary: Arc<MockDictionary>,
) -> GameEntryResolver {
    GameEntryResolver::new(validator(translator, dictionary))
}
