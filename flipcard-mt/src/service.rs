//! Process-wide translation stack
//!
//! Built once at startup. Owns the rate limiter, client and cache that every
//! session shares, and hands out sessions.

use crate::batch::BatchTranslator;
use crate::cache::TranslationCache;
use crate::clock::SystemClock;
use crate::client::TranslationClient;
use crate::config::TranslatorConfig;
use crate::error::MtResult;
use crate::http_provider::HttpProvider;
use crate::notify::{Notifier, TracingNotifier};
use crate::rate_limiter::RateLimiter;
use crate::session::TranslationSession;
use std::sync::Arc;

#[derive(Clone)]
pub struct TranslationService {
    client: Arc<TranslationClient>,
    cache: Arc<TranslationCache>,
    batch: BatchTranslator,
    notifier: Arc<dyn Notifier>,
}

impl TranslationService {
    pub fn new(client: TranslationClient) -> Self {
        let client = Arc::new(client);
        Self {
            cache: Arc::new(TranslationCache::new(client.clone())),
            batch: BatchTranslator::new(client.clone()),
            client,
            notifier: Arc::new(TracingNotifier),
        }
    }

    /// Build the stack described by `config`
    ///
    /// Without an API key the client runs in pass-through mode.
    pub fn from_config(config: &TranslatorConfig) -> MtResult<Self> {
        let limiter = Arc::new(RateLimiter::new(config.min_interval, Arc::new(SystemClock)));

        let client = match config.api_key.as_deref().filter(|_| config.has_credential()) {
            Some(api_key) => {
                let provider = HttpProvider::new(api_key.to_string(), &config.base_url, config.timeout)?;
                tracing::info!(base_url = %config.base_url, "translation provider configured");
                TranslationClient::new(Arc::new(provider), limiter)
            }
            None => {
                tracing::info!("no translation API key set, translations will pass through");
                TranslationClient::unconfigured(limiter)
            }
        };

        Ok(Self::new(client))
    }

    /// Send session notifications to `notifier` instead of the log
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// Start a session for one UI mount
    pub fn session(&self, default_language: &str) -> TranslationSession {
        TranslationSession::new(
            self.cache.clone(),
            self.batch.clone(),
            self.notifier.clone(),
            default_language,
        )
    }

    pub fn client(&self) -> &Arc<TranslationClient> {
        &self.client
    }

    pub fn cache(&self) -> &Arc<TranslationCache> {
        &self.cache
    }

    pub fn batch(&self) -> &BatchTranslator {
        &self.batch
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
    }
}

impl std::fmt::Debug for TranslationService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranslationService")
            .field("client", &self.client)
            .field("cache_entries", &self.cache.len())
            .finish()
    }
}
