//! Machine translation provider trait
//!
//! This module defines the `MachineTranslator` trait for provider abstraction,
//! so the client can talk to the HTTP provider in production and to a
//! deterministic mock in tests without knowing which one it holds.
//!
//! # Example
//!
//! ```ignore
//! use flipcard_mt::{HttpProvider, MachineTranslator};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = HttpProvider::new("key".to_string(), "http://127.0.0.1:5000", None)?;
//!     let result = provider.translate("Hello", "en", "es").await?;
//!     println!("{}", result.translated_text); // "Hola"
//!     Ok(())
//! }
//! ```

use crate::data::TranslationResult;
use crate::error::MtResult;
use async_trait::async_trait;

/// Generic trait for machine translation providers
///
/// Implementations perform exactly one provider round-trip per call and
/// report every failure as an `Err`. Turning failures into pass-through
/// results is the job of [`TranslationClient`](crate::TranslationClient).
#[async_trait]
pub trait MachineTranslator: Send + Sync {
    /// Translate a single text
    ///
    /// # Arguments
    ///
    /// * `text` - The text to translate
    /// * `source_locale` - Source language code, or `"auto"` to let the provider detect it
    /// * `target_locale` - Target language code
    ///
    /// # Returns
    ///
    /// * `Ok(TranslationResult)` - The translation with the languages and
    ///   confidence reported by the provider
    /// * `Err(MtError)` - If the provider could not be reached or answered badly
    async fn translate(
        &self,
        text: &str,
        source_locale: &str,
        target_locale: &str,
    ) -> MtResult<TranslationResult>;

    /// Get the name of this translation provider
    ///
    /// Used for logging to identify which provider handled a translation.
    fn provider_name(&self) -> &str;
}
