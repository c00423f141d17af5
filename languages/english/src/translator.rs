use std::time::Duration;

use async_trait::async_trait;
use lexis_lookup::{LanguageCode, ProviderMetadata, TranslateError, Translation, Translator};

/// Client for the MyMemory translation API (`{api_url}?q=..&langpair=from|to`)
#[derive(Clone)]
pub struct MyMemoryTranslator {
    client: reqwest::Client,
    api_url: String,
}

impl MyMemoryTranslator {
    pub fn new(api_url: String, timeout: Duration) -> Result<Self, TranslateError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self { client, api_url })
    }
}

/// Extract the translated text from a MyMemory response body.
/// Only a numeric `responseStatus` of 200 counts as success.
pub fn parse_translation(body: &str) -> Result<(String, Option<f32>), TranslateError> {
    let json: serde_json::Value = serde_json::from_str(body)?;

    let status = json["responseStatus"].as_u64();
    if status != Some(200) {
        return Err(TranslateError::ApiError(format!(
            "responseStatus {}",
            json["responseStatus"]
        )));
    }

    let data = &json["responseData"];
    let text = data["translatedText"]
        .as_str()
        .ok_or_else(|| TranslateError::ApiError("No translation in response".to_string()))?;
    let confidence = data["match"].as_f64().map(|m| m as f32);

    Ok((text.to_string(), confidence))
}

#[async_trait]
impl Translator for MyMemoryTranslator {
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, TranslateError> {
        let langpair = format!("{from}|{to}");
        let params = [("q", text), ("langpair", langpair.as_str())];
        tracing::debug!("Requesting translation of '{}' ({})", text, langpair);

        let response = self
            .client
            .get(&self.api_url)
            .query(&params)
            .send()
            .await?;

        if response.status() == 429 {
            return Err(TranslateError::RateLimitExceeded);
        }

        if !response.status().is_success() {
            return Err(TranslateError::ApiError(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let body = response.text().await?;
        let (translated, confidence) = parse_translation(&body)?;

        Ok(Translation {
            text: translated,
            from,
            to,
            provider: "mymemory".to_string(),
            confidence,
        })
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "MyMemory".to_string(),
            requires_api_key: false,
            free_tier_available: true,
        }
    }
}
