use linguazoo_types::Language;
use serde::{Deserialize, Serialize};

pub mod free_dictionary;

pub use self::free_dictionary::FreeDictionaryClient;

/// One meaning/gloss pair of a dictionary entry, flattened out of whatever
/// nesting the provider uses. Just enough text for keyword search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SenseDefinition {
    pub part_of_speech: String,
    pub gloss: String,
}

impl SenseDefinition {
    pub fn new(part_of_speech: impl Into<String>, gloss: impl Into<String>) -> Self {
        Self {
            part_of_speech: part_of_speech.into(),
            gloss: gloss.into(),
        }
    }

    /// Lowercase text searched by the classifier.
    pub fn search_text(&self) -> String {
        format!("{} {}", self.part_of_speech, self.gloss).to_lowercase()
    }
}

/// Dictionary lookup operations
#[async_trait::async_trait]
pub trait DictionaryLookup: Send + Sync {
    /// Fetch all sense definitions for a word in the given language.
    async fn lookup(
        &self,
        word: &str,
        language: Language,
    ) -> Result<Vec<SenseDefinition>, LookupError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// Well-formed "no entry" answer from the provider. A normal outcome,
    /// not a fault.
    #[error("word not found in dictionary")]
    NotFound,

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Response that does not match the expected shape. Treated as a
    /// transport failure by callers.
    #[error("malformed response: {0}")]
    Malformed(String),
}
