use linguazoo_types::Language;

pub mod mymemory;

pub use self::mymemory::MyMemoryTranslator;

/// Translation provider interface
#[async_trait::async_trait]
pub trait Translator: Send + Sync {
    /// Translate a word from source to target language
    async fn translate(
        &self,
        text: &str,
        from: Language,
        to: Language,
    ) -> Result<String, TranslateError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    /// The call itself could not be completed (connect, timeout, TLS).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The provider answered, but with a non-success status or a body
    /// missing the translation.
    #[error("provider rejected request: {0}")]
    Provider(String),
}
