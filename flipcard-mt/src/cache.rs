//! In-memory memo of translations for the life of the process
//!
//! Entries are keyed by source language, target language and the first
//! [`KEY_PREFIX_CHARS`] characters of the text. Failed translations are
//! stored too, so a text that could not be translated is not retried
//! within the same process. The map only grows; `clear` empties it.

use crate::client::TranslationClient;
use crate::data::TranslationResult;
use crate::error::MtResult;
use flipcard_lang::BASELINE_LANGUAGE;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

/// Number of leading characters of the text that take part in the key
pub const KEY_PREFIX_CHARS: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    source_language: String,
    target_language: String,
    text_prefix: String,
}

impl CacheKey {
    pub fn new(text: &str, target_language: &str, source_language: &str) -> Self {
        Self {
            source_language: source_language.to_string(),
            target_language: target_language.to_string(),
            text_prefix: text.chars().take(KEY_PREFIX_CHARS).collect(),
        }
    }
}

/// Hit and miss counters since the cache was created
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
}

#[derive(Debug, Default)]
struct CacheInner {
    entries: HashMap<CacheKey, TranslationResult>,
    hits: u64,
    misses: u64,
}

#[derive(Debug)]
pub struct TranslationCache {
    client: Arc<TranslationClient>,
    inner: Mutex<CacheInner>,
}

/// Whether a request can be answered without translating at all
pub fn needs_no_translation(target_language: &str, source_language: &str) -> bool {
    source_language == target_language || target_language == BASELINE_LANGUAGE
}

impl TranslationCache {
    pub fn new(client: Arc<TranslationClient>) -> Self {
        Self {
            client,
            inner: Mutex::new(CacheInner::default()),
        }
    }

    pub fn client(&self) -> &Arc<TranslationClient> {
        &self.client
    }

    fn lock(&self) -> MutexGuard<'_, CacheInner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Return the memoized translation, translating and storing it on a miss
    ///
    /// Requests whose source equals the target, or that target the baseline
    /// language, return the text unchanged with confidence 1 and never touch
    /// the cache or the provider.
    pub async fn get_or_translate(
        &self,
        text: &str,
        target_language: &str,
        source_language: &str,
    ) -> MtResult<TranslationResult> {
        if needs_no_translation(target_language, source_language) {
            return Ok(TranslationResult::unchanged(
                text,
                source_language,
                target_language,
            ));
        }

        let key = CacheKey::new(text, target_language, source_language);
        {
            let mut inner = self.lock();
            if let Some(hit) = inner.entries.get(&key).cloned() {
                inner.hits += 1;
                tracing::debug!(target_language = target_language, "translation cache hit");
                return Ok(hit);
            }
        }

        tracing::debug!(target_language = target_language, "translation cache miss");
        let result = self
            .client
            .translate(text, target_language, source_language)
            .await?;

        let mut inner = self.lock();
        inner.misses += 1;
        inner.entries.insert(key, result.clone());
        Ok(result)
    }

    /// Drop every stored translation
    pub fn clear(&self) {
        let mut inner = self.lock();
        tracing::debug!(entries = inner.entries.len(), "clearing translation cache");
        inner.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> CacheStats {
        let inner = self.lock();
        CacheStats {
            entries: inner.entries.len(),
            hits: inner.hits,
            misses: inner.misses,
        }
    }
}
