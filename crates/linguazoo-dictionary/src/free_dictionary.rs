use std::time::Duration;

use async_trait::async_trait;
use linguazoo_config::Config;
use linguazoo_types::Language;
use reqwest::StatusCode;
use serde::Deserialize;

use crate::{DictionaryLookup, LookupError, SenseDefinition};

/// Client for the Free Dictionary API (dictionaryapi.dev).
#[derive(Clone)]
pub struct FreeDictionaryClient {
    client: reqwest::Client,
    api_url: String,
}

impl FreeDictionaryClient {
    pub fn new(config: &Config) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.network.timeout_seconds))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            api_url: config.dictionary.api_url.clone(),
        }
    }

    pub fn with_api_url(api_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
        }
    }
}

#[async_trait]
impl DictionaryLookup for FreeDictionaryClient {
    async fn lookup(
        &self,
        word: &str,
        language: Language,
    ) -> Result<Vec<SenseDefinition>, LookupError> {
        let url = format!(
            "{}/{}/{}",
            self.api_url,
            language.code(),
            word.to_lowercase()
        );

        let response = self.client.get(&url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            tracing::debug!(%word, "no dictionary entry");
            return Err(LookupError::NotFound);
        }

        if !response.status().is_success() {
            return Err(LookupError::Malformed(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let entries: Vec<DictionaryEntry> = response
            .json()
            .await
            .map_err(|e| LookupError::Malformed(format!("failed to parse response: {}", e)))?;

        let definitions: Vec<SenseDefinition> = entries
            .into_iter()
            .flat_map(|entry| entry.meanings)
            .flat_map(|meaning| {
                let pos = meaning.part_of_speech;
                meaning
                    .definitions
                    .into_iter()
                    .map(move |d| SenseDefinition::new(pos.clone(), d.definition))
            })
            .collect();

        tracing::debug!(%word, count = definitions.len(), "dictionary lookup");

        Ok(definitions)
    }
}

#[derive(Deserialize)]
struct DictionaryEntry {
    #[serde(default)]
    meanings: Vec<Meaning>,
}

#[derive(Deserialize)]
struct Meaning {
    #[serde(rename = "partOfSpeech", default)]
    part_of_speech: String,
    #[serde(default)]
    definitions: Vec<DefinitionBody>,
}

#[derive(Deserialize)]
struct DefinitionBody {
    #[serde(default)]
    definition: String,
}
