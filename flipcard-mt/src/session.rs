//! Per-mount translation state for the study UI
//!
//! A `TranslationSession` is what the UI talks to. It tracks whether a
//! translation is running, the last error, and the language the cards are
//! currently shown in. The UI can poll [`TranslationSession::state`] or
//! watch changes through [`TranslationSession::subscribe`].
//!
//! Every operation returns text the UI can display. When translation fails
//! the original text comes back, the error is stored in the state and a
//! notification is raised.
//!
//! Calls are not queued: if the UI starts a second translation before the
//! first finishes, both run and the one that finishes last decides the
//! final state.

use crate::batch::BatchTranslator;
use crate::cache::{TranslationCache, needs_no_translation};
use crate::data::{Flashcard, TranslationResult};
use crate::notify::{Notification, Notifier};
use flipcard_lang::{BASELINE_LANGUAGE, get_language_name};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::watch;

/// Phrase sent by [`TranslationSession::test_connection`]
pub const CONNECTION_PROBE: &str = "Hello";
const CONNECTION_PROBE_TARGET: &str = "es";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    pub is_translating: bool,
    pub error: Option<String>,
    pub current_language: String,
}

/// Outcome of probing the translation provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionStatus {
    /// No API key; translations pass through untouched
    Unconfigured,
    /// Provider answered; carries the translated probe phrase
    Connected(String),
    /// Provider is configured but did not translate the probe
    Failed,
}

pub struct TranslationSession {
    cache: Arc<TranslationCache>,
    batch: BatchTranslator,
    notifier: Arc<dyn Notifier>,
    state: watch::Sender<SessionState>,
}

impl TranslationSession {
    pub fn new(
        cache: Arc<TranslationCache>,
        batch: BatchTranslator,
        notifier: Arc<dyn Notifier>,
        default_language: &str,
    ) -> Self {
        let (state, _) = watch::channel(SessionState {
            is_translating: false,
            error: None,
            current_language: default_language.to_string(),
        });
        Self {
            cache,
            batch,
            notifier,
            state,
        }
    }

    /// Snapshot of the current state
    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    /// Receiver that sees every state change from now on
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    pub fn is_translating(&self) -> bool {
        self.state.borrow().is_translating
    }

    pub fn error(&self) -> Option<String> {
        self.state.borrow().error.clone()
    }

    pub fn current_language(&self) -> String {
        self.state.borrow().current_language.clone()
    }

    /// Translate one text and return what the UI should display
    ///
    /// Returns `text` unchanged, without touching state, when `target` equals
    /// `source`.
    pub async fn translate_single(&self, text: &str, target: &str, source: &str) -> String {
        if target == source {
            return text.to_string();
        }

        self.begin();
        match self.cache.get_or_translate(text, target, source).await {
            Ok(result) if self.is_failure(&result) => {
                self.fail(format!(
                    "Could not translate to {}, showing original text",
                    get_language_name(target)
                ));
                result.translated_text
            }
            Ok(result) => {
                self.finish(target);
                result.translated_text
            }
            Err(e) => {
                self.fail(format!("Translation failed: {}", e));
                text.to_string()
            }
        }
    }

    /// Translate several texts, returning them in input order
    ///
    /// Items that could not be translated come back as their original text.
    pub async fn translate_multiple(
        &self,
        texts: &[String],
        target: &str,
        source: &str,
    ) -> Vec<String> {
        if target == source {
            return texts.to_vec();
        }

        self.run_batch(texts, target, source)
            .await
            .into_iter()
            .map(|result| result.translated_text)
            .collect()
    }

    /// Translate the front, back and topic of every card
    pub async fn translate_cards(
        &self,
        cards: &[Flashcard],
        target: &str,
        source: &str,
    ) -> Vec<Flashcard> {
        if target == source {
            return cards.to_vec();
        }

        let results = self
            .run_batch(&Flashcard::flatten(cards), target, source)
            .await;
        Flashcard::reassemble(&results)
    }

    /// Change the display language without translating anything
    pub fn set_language(&self, language: &str) {
        self.state.send_modify(|state| {
            state.current_language = language.to_string();
        });
    }

    pub fn clear_error(&self) {
        self.state.send_modify(|state| state.error = None);
    }

    /// Check that the provider answers, bypassing the cache
    pub async fn test_connection(&self) -> ConnectionStatus {
        let client = self.cache.client();
        if !client.is_configured() {
            self.notifier.notify(Notification::info(
                "No translation API key configured, cards are shown untranslated",
            ));
            return ConnectionStatus::Unconfigured;
        }

        self.begin();
        let probe = client
            .translate(CONNECTION_PROBE, CONNECTION_PROBE_TARGET, BASELINE_LANGUAGE)
            .await;

        match probe {
            Ok(result) if !result.is_fallback() => {
                self.state.send_modify(|state| state.is_translating = false);
                self.notifier.notify(Notification::success(format!(
                    "Translation service connected ({})",
                    client.provider_name()
                )));
                ConnectionStatus::Connected(result.translated_text)
            }
            _ => {
                self.fail("Translation service is not responding".to_string());
                ConnectionStatus::Failed
            }
        }
    }

    async fn run_batch(&self, texts: &[String], target: &str, source: &str) -> Vec<TranslationResult> {
        self.begin();
        let results = if needs_no_translation(target, source) {
            texts
                .iter()
                .map(|text| TranslationResult::unchanged(text, source, target))
                .collect()
        } else {
            self.batch.translate_batch(texts, target, source).await
        };

        let failed = results.iter().filter(|r| self.is_failure(r)).count();
        if failed > 0 {
            self.fail(format!(
                "{} of {} texts could not be translated to {}",
                failed,
                results.len(),
                get_language_name(target)
            ));
        } else {
            self.finish(target);
        }
        results
    }

    /// A fallback only counts as a failure when a provider was supposed to answer
    fn is_failure(&self, result: &TranslationResult) -> bool {
        result.is_fallback() && self.cache.client().is_configured()
    }

    fn begin(&self) {
        self.state.send_modify(|state| {
            state.is_translating = true;
            state.error = None;
        });
    }

    fn finish(&self, target: &str) {
        tracing::info!(language = target, "translation finished");
        self.state.send_modify(|state| {
            state.is_translating = false;
            state.current_language = target.to_string();
        });
    }

    fn fail(&self, message: String) {
        self.state.send_modify(|state| {
            state.is_translating = false;
            state.error = Some(message.clone());
        });
        self.notifier.notify(Notification::error(message));
    }
}

impl std::fmt::Debug for TranslationSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranslationSession")
            .field("state", &*self.state.borrow())
            .finish()
    }
}
