//! HTTP translation provider
//!
//! Talks to a translation service exposing `POST {base_url}/translate` with
//! bearer-token authentication.
//!
//! Request body:
//!
//! ```json
//! { "text": "Hello", "target_language": "es", "source_language": "en" }
//! ```
//!
//! `source_language` is left out when the caller asks for auto-detection.
//! The response must be a JSON object carrying the translated text. Several
//! spellings of each field are accepted since providers disagree on them.

use crate::data::TranslationResult;
use crate::error::{MtError, MtResult};
use crate::translator::MachineTranslator;
use async_trait::async_trait;
use flipcard_lang::is_auto;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

const TRANSLATED_TEXT_FIELDS: [&str; 4] = ["translated_text", "translatedText", "translation", "text"];
const SOURCE_LANGUAGE_FIELDS: [&str; 4] = [
    "source_language",
    "sourceLanguage",
    "detected_source_language",
    "detectedSourceLanguage",
];
const TARGET_LANGUAGE_FIELDS: [&str; 2] = ["target_language", "targetLanguage"];

#[derive(Debug, Serialize)]
struct TranslateRequestBody<'a> {
    text: &'a str,
    target_language: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    source_language: Option<&'a str>,
}

/// Remote translation provider reached over HTTP
#[derive(Clone)]
pub struct HttpProvider {
    /// Bearer credential
    api_key: String,
    client: reqwest::Client,
    /// Base URL without the `/translate` suffix
    base_url: String,
}

impl HttpProvider {
    /// Create a provider for the service at `base_url`
    ///
    /// # Returns
    ///
    /// * `Ok(Self)` - New provider instance
    /// * `Err(MtError)` - If the API key is blank or the HTTP client cannot be built
    pub fn new(api_key: String, base_url: &str, timeout: Option<Duration>) -> MtResult<Self> {
        if api_key.trim().is_empty() {
            return Err(MtError::ConfigError("API key cannot be empty".to_string()));
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| MtError::NetworkError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            api_key,
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/translate", self.base_url)
    }

    /// Pull a `TranslationResult` out of a provider response body
    fn parse_response(
        json: &Value,
        source_locale: &str,
        target_locale: &str,
    ) -> MtResult<TranslationResult> {
        if !json.is_object() {
            return Err(MtError::TranslationError(
                "Invalid API response: body is not a JSON object".to_string(),
            ));
        }

        let translated_text = first_str(json, &TRANSLATED_TEXT_FIELDS).ok_or_else(|| {
            MtError::TranslationError(
                "Invalid API response: missing translated text field".to_string(),
            )
        })?;

        // Zero is reserved for fallbacks, so a reported confidence never reaches it
        let confidence = json["confidence"]
            .as_f64()
            .map(|c| (c.clamp(0.0, 1.0) as f32).max(f32::MIN_POSITIVE))
            .unwrap_or(1.0);

        Ok(TranslationResult {
            translated_text: translated_text.to_string(),
            source_language: first_str(json, &SOURCE_LANGUAGE_FIELDS)
                .unwrap_or(source_locale)
                .to_string(),
            target_language: first_str(json, &TARGET_LANGUAGE_FIELDS)
                .unwrap_or(target_locale)
                .to_string(),
            confidence,
        })
    }
}

fn first_str<'a>(json: &'a Value, fields: &[&str]) -> Option<&'a str> {
    fields.iter().find_map(|field| json[*field].as_str())
}

impl std::fmt::Debug for HttpProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpProvider")
            .field("api_key", &"***")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[async_trait]
impl MachineTranslator for HttpProvider {
    async fn translate(
        &self,
        text: &str,
        source_locale: &str,
        target_locale: &str,
    ) -> MtResult<TranslationResult> {
        let body = TranslateRequestBody {
            text,
            target_language: target_locale,
            source_language: (!is_auto(source_locale)).then_some(source_locale),
        };

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(MtError::ProviderError {
                status: status.as_u16(),
                body: error_text,
            });
        }

        let json: Value = response.json().await.map_err(|e| {
            MtError::TranslationError(format!("Failed to parse API response: {}", e))
        })?;

        Self::parse_response(&json, source_locale, target_locale)
    }

    fn provider_name(&self) -> &str {
        "HTTP Translation API"
    }
}
