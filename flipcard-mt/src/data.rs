//! Data types shared across the translation pipeline

use serde::{Deserialize, Serialize};

/// Outcome of translating one text
///
/// A `confidence` of 0 marks a pass-through: the text was not actually
/// translated and `translated_text` holds the original.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResult {
    pub translated_text: String,
    pub source_language: String,
    pub target_language: String,
    pub confidence: f32,
}

impl TranslationResult {
    /// Original text returned unchanged because no translation was needed
    pub fn unchanged(text: &str, source_language: &str, target_language: &str) -> Self {
        Self {
            translated_text: text.to_string(),
            source_language: source_language.to_string(),
            target_language: target_language.to_string(),
            confidence: 1.0,
        }
    }

    /// Original text returned because translation was not possible
    pub fn fallback(text: &str, source_language: &str, target_language: &str) -> Self {
        Self {
            confidence: 0.0,
            ..Self::unchanged(text, source_language, target_language)
        }
    }

    /// Whether this result carries untranslated text in place of a translation
    pub fn is_fallback(&self) -> bool {
        self.confidence <= 0.0
    }
}

/// A single flashcard as shown in the study UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    pub front: String,
    pub back: String,
    pub topic: String,
}

impl Flashcard {
    pub fn new(front: &str, back: &str, topic: &str) -> Self {
        Self {
            front: front.to_string(),
            back: back.to_string(),
            topic: topic.to_string(),
        }
    }

    /// Card fields as one flat list, (front, back, topic) per card
    pub fn flatten(cards: &[Flashcard]) -> Vec<String> {
        cards
            .iter()
            .flat_map(|card| [card.front.clone(), card.back.clone(), card.topic.clone()])
            .collect()
    }

    /// Rebuild cards from results produced for [`Flashcard::flatten`] output
    ///
    /// A trailing group shorter than three fields is dropped.
    pub fn reassemble(results: &[TranslationResult]) -> Vec<Flashcard> {
        results
            .chunks_exact(3)
            .map(|fields| Flashcard {
                front: fields[0].translated_text.clone(),
                back: fields[1].translated_text.clone(),
                topic: fields[2].translated_text.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unchanged_has_full_confidence() {
        let result = TranslationResult::unchanged("Hola", "es", "es");
        assert_eq!(result.translated_text, "Hola");
        assert_eq!(result.confidence, 1.0);
        assert!(!result.is_fallback());
    }

    #[test]
    fn test_fallback_has_zero_confidence() {
        let result = TranslationResult::fallback("Bonjour", "fr", "en");
        assert_eq!(result.translated_text, "Bonjour");
        assert_eq!(result.source_language, "fr");
        assert_eq!(result.target_language, "en");
        assert!(result.is_fallback());
    }

    #[test]
    fn test_flatten_and_reassemble_cards() {
        let cards = vec![
            Flashcard::new("dog", "a loyal pet", "animals"),
            Flashcard::new("blue", "a colour", "colours"),
        ];
        let flat = Flashcard::flatten(&cards);
        assert_eq!(
            flat,
            vec!["dog", "a loyal pet", "animals", "blue", "a colour", "colours"]
        );

        let results: Vec<_> = flat
            .iter()
            .map(|text| TranslationResult::unchanged(text, "en", "en"))
            .collect();
        assert_eq!(Flashcard::reassemble(&results), cards);
    }

    #[test]
    fn test_result_uses_camel_case_on_the_wire() {
        let json = serde_json::to_value(TranslationResult::unchanged("a", "en", "es")).unwrap();
        assert_eq!(json["translatedText"], "a");
        assert_eq!(json["sourceLanguage"], "en");
        assert_eq!(json["targetLanguage"], "es");
    }
}
