//! Mock Machine Translator for testing
//!
//! A deterministic, network-free provider used by the test suite and by the
//! CLI's `--mock` flag. It counts how many times it was called so tests can
//! assert that caching and pass-through paths never reach the provider.
//!
//! # Example
//!
//! ```ignore
//! use flipcard_mt::{MachineTranslator, MockMode, MockTranslator};
//!
//! #[tokio::test]
//! async fn test_translation() {
//!     let mock = MockTranslator::new(MockMode::Suffix);
//!     let result = mock.translate("hello", "en", "fr").await.unwrap();
//!     assert_eq!(result.translated_text, "hello_fr");
//! }
//! ```

use crate::data::TranslationResult;
use crate::error::{MtError, MtResult};
use crate::translator::MachineTranslator;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Mock translation modes for testing different scenarios
#[derive(Debug, Clone)]
pub enum MockMode {
    /// Append locale suffix: "hello" → "hello_fr"
    Suffix,

    /// Use predefined mappings for realistic translations
    /// (text, target_locale) → translation, falling back to `Suffix`
    Mappings(HashMap<(String, String), String>),

    /// Simulate provider errors
    Error(String),

    /// No-op: return input unchanged
    NoOp,
}

/// Mock translator that simulates various provider behaviours
#[derive(Debug)]
pub struct MockTranslator {
    mode: MockMode,
    /// Optional simulated network delay (in milliseconds)
    delay_ms: u64,
    calls: AtomicUsize,
}

impl MockTranslator {
    /// Create a new MockTranslator with the given mode
    pub fn new(mode: MockMode) -> Self {
        Self::with_delay(mode, 0)
    }

    /// Create a MockTranslator with simulated network delay
    ///
    /// ```ignore
    /// let mock = MockTranslator::with_delay(MockMode::Suffix, 50);
    /// // Each translation will have ~50ms delay
    /// ```
    pub fn with_delay(mode: MockMode, delay_ms: u64) -> Self {
        Self {
            mode,
            delay_ms,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of `translate` calls received so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    async fn apply_delay(&self) {
        if self.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        }
    }

    fn apply_translation(&self, text: &str, target: &str) -> MtResult<String> {
        match &self.mode {
            MockMode::Suffix => Ok(format!("{}_{}", text, target)),
            MockMode::Mappings(map) => {
                let key = (text.to_string(), target.to_string());
                Ok(map
                    .get(&key)
                    .cloned()
                    .unwrap_or_else(|| format!("{}_{}", text, target)))
            }
            MockMode::Error(msg) => Err(MtError::TranslationError(msg.clone())),
            MockMode::NoOp => Ok(text.to_string()),
        }
    }
}

#[async_trait]
impl MachineTranslator for MockTranslator {
    async fn translate(
        &self,
        text: &str,
        source_locale: &str,
        target_locale: &str,
    ) -> MtResult<TranslationResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.apply_delay().await;

        let translated = self.apply_translation(text, target_locale)?;
        Ok(TranslationResult {
            translated_text: translated,
            source_language: source_locale.to_string(),
            target_language: target_locale.to_string(),
            confidence: 1.0,
        })
    }

    fn provider_name(&self) -> &str {
        "Mock Translator"
    }
}
