use std::time::Duration;

use async_trait::async_trait;
use lexis_lookup::{Definition, DefinitionError, DefinitionProvider, ProviderMetadata};
use serde::Deserialize;

/// Client for the Free Dictionary API (`{api_url}/{word}`)
#[derive(Clone)]
pub struct FreeDictionaryClient {
    client: reqwest::Client,
    api_url: String,
}

impl FreeDictionaryClient {
    pub fn new(api_url: String, timeout: Duration) -> Result<Self, DefinitionError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }

    fn entry_url(&self, word: &str) -> String {
        format!("{}/{}", self.api_url, word)
    }
}

// Response shape: [{ "word": .., "meanings": [{ "partOfSpeech": .., "definitions": [{ "definition": .. }] }] }]
#[derive(Debug, Deserialize)]
struct EntryJson {
    #[serde(default)]
    meanings: Vec<MeaningJson>,
}

#[derive(Debug, Deserialize)]
struct MeaningJson {
    #[serde(rename = "partOfSpeech", default)]
    part_of_speech: Option<String>,
    #[serde(default)]
    definitions: Vec<DefinitionJson>,
}

#[derive(Debug, Deserialize)]
struct DefinitionJson {
    #[serde(default)]
    definition: String,
}

/// Pull the first definition of the first meaning group out of a response body
pub fn parse_definition(word: &str, body: &str) -> Result<Definition, DefinitionError> {
    let entries: Vec<EntryJson> = serde_json::from_str(body)?;

    let meaning = entries
        .into_iter()
        .next()
        .and_then(|entry| entry.meanings.into_iter().next())
        .ok_or_else(|| DefinitionError::NotFound(word.to_string()))?;

    let text = meaning
        .definitions
        .into_iter()
        .next()
        .map(|d| d.definition)
        .filter(|text| !text.is_empty())
        .ok_or_else(|| DefinitionError::NotFound(word.to_string()))?;

    Ok(Definition {
        word: word.to_string(),
        text,
        part_of_speech: meaning.part_of_speech,
    })
}

#[async_trait]
impl DefinitionProvider for FreeDictionaryClient {
    async fn define(&self, word: &str) -> Result<Definition, DefinitionError> {
        let url = self.entry_url(word);
        tracing::debug!("Requesting definition: {}", url);
        let response = self.client.get(url).send().await?;

        if response.status() == 404 {
            return Err(DefinitionError::NotFound(word.to_string()));
        }

        if response.status() == 429 {
            return Err(DefinitionError::RateLimitExceeded);
        }

        if !response.status().is_success() {
            return Err(DefinitionError::ApiError(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let body = response.text().await?;
        parse_definition(word, &body)
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Free Dictionary API".to_string(),
            requires_api_key: false,
            free_tier_available: true,
        }
    }
}
