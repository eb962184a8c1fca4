//! Sequential translation of many texts
//!
//! Results line up index-for-index with the input so callers can zip them
//! back onto structured records. Items are translated one after another;
//! the shared rate limiter spaces the provider calls.

use crate::client::TranslationClient;
use crate::data::{Flashcard, TranslationResult};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct BatchTranslator {
    client: Arc<TranslationClient>,
}

impl BatchTranslator {
    pub fn new(client: Arc<TranslationClient>) -> Self {
        Self { client }
    }

    /// Translate every text, one result per input in the same order
    ///
    /// Blank texts come back unchanged with confidence 1 and never reach the
    /// provider. A failing item becomes a confidence-0 fallback and the rest
    /// of the batch carries on.
    pub async fn translate_batch(
        &self,
        texts: &[String],
        target_language: &str,
        source_language: &str,
    ) -> Vec<TranslationResult> {
        let mut results = Vec::with_capacity(texts.len());

        for (index, text) in texts.iter().enumerate() {
            if text.trim().is_empty() {
                results.push(TranslationResult::unchanged(
                    text,
                    source_language,
                    target_language,
                ));
                continue;
            }

            let result = match self
                .client
                .translate(text, target_language, source_language)
                .await
            {
                Ok(result) => result,
                Err(e) => {
                    tracing::warn!(index, error = %e, "batch item failed, keeping original text");
                    TranslationResult::fallback(text, source_language, target_language)
                }
            };
            results.push(result);
        }

        debug_assert_eq!(results.len(), texts.len());
        results
    }

    /// Translate the front, back and topic of every card
    ///
    /// All fields go out as one flattened batch and are reassembled in
    /// (front, back, topic) order.
    pub async fn translate_cards(
        &self,
        cards: &[Flashcard],
        target_language: &str,
        source_language: &str,
    ) -> Vec<Flashcard> {
        let texts = Flashcard::flatten(cards);
        let results = self
            .translate_batch(&texts, target_language, source_language)
            .await;
        Flashcard::reassemble(&results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::mock::{MockMode, MockTranslator};
    use crate::rate_limiter::{MIN_INTERVAL, RateLimiter};

    fn batch_with(mode: MockMode) -> (Arc<MockTranslator>, BatchTranslator) {
        let mock = Arc::new(MockTranslator::new(mode));
        let limiter = Arc::new(RateLimiter::new(MIN_INTERVAL, Arc::new(ManualClock::new())));
        let client = Arc::new(TranslationClient::new(mock.clone(), limiter));
        (mock, BatchTranslator::new(client))
    }

    fn strings(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_blank_item_is_pass_through() {
        let (mock, batch) = batch_with(MockMode::Suffix);
        let results = batch
            .translate_batch(&strings(&["a", "", "b"]), "es", "en")
            .await;

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].translated_text, "a_es");
        assert_eq!(results[1].translated_text, "");
        assert_eq!(results[1].confidence, 1.0);
        assert_eq!(results[2].translated_text, "b_es");
        assert_eq!(mock.calls(), 2);
    }

    #[tokio::test]
    async fn test_whitespace_item_is_kept_verbatim() {
        let (mock, batch) = batch_with(MockMode::Suffix);
        let results = batch.translate_batch(&strings(&["  "]), "es", "en").await;
        assert_eq!(results[0].translated_text, "  ");
        assert_eq!(mock.calls(), 0);
    }

    #[tokio::test]
    async fn test_failures_do_not_abort_batch() {
        let (mock, batch) = batch_with(MockMode::Error("timeout".to_string()));
        let results = batch
            .translate_batch(&strings(&["one", "two", "three"]), "es", "en")
            .await;

        let texts: Vec<_> = results.iter().map(|r| r.translated_text.as_str()).collect();
        assert_eq!(texts, vec!["one", "two", "three"]);
        assert!(results.iter().all(|r| r.confidence == 0.0));
        assert_eq!(mock.calls(), 3);
    }

    #[tokio::test]
    async fn test_empty_batch() {
        let (mock, batch) = batch_with(MockMode::Suffix);
        assert!(batch.translate_batch(&[], "es", "en").await.is_empty());
        assert_eq!(mock.calls(), 0);
    }

    #[tokio::test]
    async fn test_translate_cards_reassembles_fields() {
        let (_, batch) = batch_with(MockMode::Suffix);
        let cards = vec![
            Flashcard::new("cat", "a small pet", "animals"),
            Flashcard::new("red", "", "colours"),
        ];

        let translated = batch.translate_cards(&cards, "fr", "en").await;

        assert_eq!(
            translated,
            vec![
                Flashcard::new("cat_fr", "a small pet_fr", "animals_fr"),
                Flashcard::new("red_fr", "", "colours_fr"),
            ]
        );
    }
}
