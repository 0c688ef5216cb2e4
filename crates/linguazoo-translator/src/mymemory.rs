use std::time::Duration;

use async_trait::async_trait;
use linguazoo_config::Config;
use linguazoo_types::Language;

use crate::{TranslateError, Translator};

#[derive(Clone)]
pub struct MyMemoryTranslator {
    client: reqwest::Client,
    api_url: String,
}

impl MyMemoryTranslator {
    pub fn new(config: &Config) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.network.timeout_seconds))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            api_url: config.translator.api_url.clone(),
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
impl Translator for MyMemoryTranslator {
    async fn translate(
        &self,
        text: &str,
        from: Language,
        to: Language,
    ) -> Result<String, TranslateError> {
        let langpair = format!("{}|{}", from.code(), to.code());

        let response = self
            .client
            .get(&self.api_url)
            .query(&[("q", text), ("langpair", langpair.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(TranslateError::Provider(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| TranslateError::Provider(format!("failed to parse response: {}", e)))?;

        if json["responseStatus"].as_i64() != Some(200) {
            let details = json["responseDetails"].as_str().unwrap_or("no details");
            return Err(TranslateError::Provider(details.to_string()));
        }

        let translated = json["responseData"]["translatedText"]
            .as_str()
            .ok_or_else(|| TranslateError::Provider("no translation in response".to_string()))?;

        tracing::debug!(%text, %translated, "mymemory translation");

        Ok(translated.to_string())
    }
}
