use std::sync::Arc;

use linguazoo_dictionary::{DictionaryLookup, LookupError};
use linguazoo_translator::{TranslateError, Translator};
use linguazoo_types::{Language, canonical_key};

use crate::classifier::AnimalClassifier;

/// Outcome of validating one (word, language) pair. Immutable; constructed
/// only through the helpers below so `error.is_some()` always implies
/// `!is_valid`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    /// Translated/canonical name when known, kept even on failure so the
    /// caller can still name the word in messages.
    pub resolved_name: Option<String>,
    pub error: Option<ErrorKind>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Transport/connectivity failure in translation or lookup. Always
    /// retryable; never a content judgment.
    Network,
    /// Confirmed negative from the dictionary provider.
    WordNotFound,
    /// Anything unexpected; treated conservatively as invalid.
    Unknown,
}

impl ValidationResult {
    pub fn valid(resolved_name: String) -> Self {
        Self {
            is_valid: true,
            resolved_name: Some(resolved_name),
            error: None,
        }
    }

    pub fn invalid(resolved_name: Option<String>) -> Self {
        Self {
            is_valid: false,
            resolved_name,
            error: None,
        }
    }

    pub fn failed(error: ErrorKind, resolved_name: Option<String>) -> Self {
        Self {
            is_valid: false,
            resolved_name,
            error: Some(error),
        }
    }

    pub fn is_network_error(&self) -> bool {
        self.error == Some(ErrorKind::Network)
    }
}

/// Composes translation, dictionary lookup and classification into one
/// verdict for a single language direction. Never fails past its boundary:
/// every failure is folded into the returned `ValidationResult`.
pub struct AnimalValidator {
    translator: Arc<dyn Translator>,
    dictionary: Arc<dyn DictionaryLookup>,
    classifier: AnimalClassifier,
}

/// Dictionary lookups always happen in English; Indonesian words are
/// translated first. There is no reverse path.
const LOOKUP_LANGUAGE: Language = Language::English;

impl AnimalValidator {
    pub fn new(
        translator: Arc<dyn Translator>,
        dictionary: Arc<dyn DictionaryLookup>,
        classifier: AnimalClassifier,
    ) -> Self {
        Self {
            translator,
            dictionary,
            classifier,
        }
    }

    pub fn classifier(&self) -> &AnimalClassifier {
        &self.classifier
    }

    pub async fn validate(&self, word: &str, language: Language) -> ValidationResult {
        let word = canonical_key(word);
        if word.is_empty() {
            return ValidationResult::invalid(None);
        }

        // Category nouns fail fast, before any remote call.
        if self.classifier.is_blacklisted(&word) {
            tracing::debug!(%word, "blacklisted category noun");
            return ValidationResult::invalid(Some(word));
        }

        let lookup_word = if language == LOOKUP_LANGUAGE {
            word.clone()
        } else {
            match self
                .translator
                .translate(&word, language, LOOKUP_LANGUAGE)
                .await
            {
                Ok(translated) => canonical_key(&translated),
                Err(e) => {
                    tracing::debug!(%word, error = %e, "translation failed");
                    return ValidationResult::failed(translate_error_kind(&e), None);
                }
            }
        };

        let definitions = match self.dictionary.lookup(&lookup_word, LOOKUP_LANGUAGE).await {
            Ok(definitions) => definitions,
            Err(LookupError::NotFound) => {
                return ValidationResult::failed(
                    ErrorKind::WordNotFound,
                    Some(lookup_word),
                );
            }
            Err(e) => {
                tracing::debug!(%lookup_word, error = %e, "dictionary lookup failed");
                return ValidationResult::failed(lookup_error_kind(&e), Some(lookup_word));
            }
        };

        if self.classifier.classify(&definitions, &word) {
            ValidationResult::valid(lookup_word)
        } else {
            ValidationResult::invalid(Some(lookup_word))
        }
    }
}

// Provider rejection is mapped to Network rather than a content verdict:
// a flaky provider must never make a real animal look invalid.
fn translate_error_kind(error: &TranslateError) -> ErrorKind {
    match error {
        TranslateError::Network(_) | TranslateError::Provider(_) => ErrorKind::Network,
    }
}

fn lookup_error_kind(error: &LookupError) -> ErrorKind {
    match error {
        LookupError::Network(_) | LookupError::Malformed(_) => ErrorKind::Network,
        LookupError::NotFound => ErrorKind::WordNotFound,
    }
}
