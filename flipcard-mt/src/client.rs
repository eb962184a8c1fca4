//! Fault-tolerant single-text translation
//!
//! `TranslationClient` wraps an optional provider and the shared rate
//! limiter. Whatever the provider does, the caller gets a
//! `TranslationResult` back; only blank input is rejected.

use crate::data::TranslationResult;
use crate::error::{MtError, MtResult};
use crate::rate_limiter::RateLimiter;
use crate::translator::MachineTranslator;
use std::sync::Arc;

pub struct TranslationClient {
    provider: Option<Arc<dyn MachineTranslator>>,
    limiter: Arc<RateLimiter>,
}

impl TranslationClient {
    pub fn new(provider: Arc<dyn MachineTranslator>, limiter: Arc<RateLimiter>) -> Self {
        Self {
            provider: Some(provider),
            limiter,
        }
    }

    /// Client with no provider: every translation is a pass-through
    pub fn unconfigured(limiter: Arc<RateLimiter>) -> Self {
        Self {
            provider: None,
            limiter,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.provider.is_some()
    }

    pub fn provider_name(&self) -> &str {
        self.provider
            .as_deref()
            .map(|p| p.provider_name())
            .unwrap_or("none")
    }

    /// Translate one text
    ///
    /// Pass `"auto"` as `source_language` to let the provider detect it.
    ///
    /// # Returns
    ///
    /// * `Ok(TranslationResult)` - A real translation, or the original text
    ///   with confidence 0 when no provider is configured or the provider failed
    /// * `Err(MtError::InvalidInput)` - If `text` is empty or whitespace-only
    pub async fn translate(
        &self,
        text: &str,
        target_language: &str,
        source_language: &str,
    ) -> MtResult<TranslationResult> {
        if text.trim().is_empty() {
            return Err(MtError::InvalidInput(
                "Text to translate cannot be empty".to_string(),
            ));
        }

        let Some(provider) = self.provider.as_deref() else {
            tracing::debug!("no translation provider configured, returning original text");
            return Ok(TranslationResult::fallback(
                text,
                source_language,
                target_language,
            ));
        };

        self.limiter.acquire().await;

        match provider
            .translate(text, source_language, target_language)
            .await
        {
            Ok(result) => {
                tracing::debug!(
                    provider = provider.provider_name(),
                    source_language = %result.source_language,
                    target_language = %result.target_language,
                    "translation succeeded"
                );
                Ok(result)
            }
            Err(e) => {
                tracing::warn!(
                    provider = provider.provider_name(),
                    target_language = target_language,
                    error = %e,
                    "translation failed, returning original text"
                );
                Ok(TranslationResult::fallback(
                    text,
                    source_language,
                    target_language,
                ))
            }
        }
    }
}

impl std::fmt::Debug for TranslationClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranslationClient")
            .field("provider", &self.provider_name())
            .field("limiter", &self.limiter)
            .finish()
    }
}
