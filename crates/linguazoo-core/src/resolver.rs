use linguazoo_types::{AnimalCollection, AnimalRecord, Language, canonical_key};

use crate::validator::{AnimalValidator, ErrorKind};

/// Final verdict for one candidate game entry.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEntryDecision {
    /// The word is already in the collection under the current language.
    ExistingInCurrentLanguage(AnimalRecord),
    /// The word is real but was entered under the wrong language toggle.
    /// The current-language name is only known when the collection holds
    /// the pairing; cross-language validation alone cannot supply it.
    LanguageMismatch {
        name_in_current_language: Option<String>,
    },
    /// A legitimate animal not yet in the collection. `translation` is the
    /// other-language canonical form when the Indonesian→English path
    /// produced one; `savable` is true only then, since persisting needs
    /// the full pairing.
    NewValidAnimal {
        name: String,
        translation: Option<String>,
        savable: bool,
    },
    Invalid(InvalidReason),
    /// A remote call failed in transit. Never presented as a content
    /// judgment; the caller should suggest retrying.
    NetworkUnavailable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    EmptyInput,
    /// Generic category noun such as "HEWAN".
    Blacklisted,
    /// Confirmed missing from the dictionary.
    NotInDictionary,
    /// Found in the dictionary, but nothing animal-like about it.
    NotAnAnimal,
}

/// Highest-level entry policy: duplicate detection against the collection
/// first, then two-language validation to tell wrong-toggle input apart
/// from genuinely invalid input.
pub struct GameEntryResolver {
    validator: AnimalValidator,
}

impl GameEntryResolver {
    pub fn new(validator: AnimalValidator) -> Self {
        Self { validator }
    }

    pub fn validator(&self) -> &AnimalValidator {
        &self.validator
    }

    pub async fn resolve_entry(
        &self,
        word: &str,
        current_language: Language,
        collection: &AnimalCollection,
    ) -> GameEntryDecision {
        let key = canonical_key(word);
        if key.is_empty() {
            return GameEntryDecision::Invalid(InvalidReason::EmptyInput);
        }

        let other_language = current_language.other();

        if let Some(record) = collection.find(current_language, &key) {
            return GameEntryDecision::ExistingInCurrentLanguage(record.clone());
        }

        if let Some(record) = collection.find(other_language, &key) {
            return GameEntryDecision::LanguageMismatch {
                name_in_current_language: Some(record.name_in(current_language).to_string()),
            };
        }

        // Local rejections must not cost a network round-trip.
        if self.validator.classifier().is_blacklisted(&key) {
            return GameEntryDecision::Invalid(InvalidReason::Blacklisted);
        }

        // Fan out both language directions; join before deciding.
        let (current_result, other_result) = tokio::join!(
            self.validator.validate(&key, current_language),
            self.validator.validate(&key, other_language),
        );

        // A dropped connection must never read as "not an animal".
        if current_result.is_network_error() || other_result.is_network_error() {
            return GameEntryDecision::NetworkUnavailable;
        }

        if current_result.is_valid {
            let savable = current_language == Language::Indonesian;
            let translation = if savable {
                current_result.resolved_name
            } else {
                None
            };
            return GameEntryDecision::NewValidAnimal {
                name: key,
                translation,
                savable,
            };
        }

        if other_result.is_valid {
            return GameEntryDecision::LanguageMismatch {
                name_in_current_language: None,
            };
        }

        match current_result.error {
            Some(ErrorKind::WordNotFound) => {
                GameEntryDecision::Invalid(InvalidReason::NotInDictionary)
            }
            Some(ErrorKind::Unknown) => {
                tracing::warn!(%key, "validation failed for an unexpected reason");
                GameEntryDecision::Invalid(InvalidReason::NotAnAnimal)
            }
            _ => GameEntryDecision::Invalid(InvalidReason::NotAnAnimal),
        }
    }
}
