//! Language catalog for the flipcard study app
//!
//! A fixed, ordered list of the languages a deck can be studied in, with a
//! display name and a flag glyph for each. The catalog is static and never
//! mutated at runtime.
//!
//! # Example
//!
//! ```
//! use flipcard_lang::{get_language_flag, get_language_name};
//!
//! assert_eq!(get_language_name("es"), "Spanish");
//! assert_eq!(get_language_name("xx"), "XX");
//! assert_eq!(get_language_flag("xx"), "🌐");
//! ```

pub mod locale;

pub use locale::{AUTO_DETECT, BASELINE_LANGUAGE, is_auto, normalize_locale};

use serde::Serialize;

/// Glyph shown for codes that are not in the catalog
pub const FALLBACK_FLAG: &str = "🌐";

/// One entry of the language catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
    pub flag: &'static str,
}

impl Language {
    const fn new(code: &'static str, name: &'static str, flag: &'static str) -> Self {
        Self { code, name, flag }
    }
}

// Order is the order shown in the language picker.
static LANGUAGES: [Language; 20] = [
    Language::new("en", "English", "🇺🇸"),
    Language::new("es", "Spanish", "🇪🇸"),
    Language::new("fr", "French", "🇫🇷"),
    Language::new("de", "German", "🇩🇪"),
    Language::new("it", "Italian", "🇮🇹"),
    Language::new("pt", "Portuguese", "🇵🇹"),
    Language::new("ru", "Russian", "🇷🇺"),
    Language::new("ja", "Japanese", "🇯🇵"),
    Language::new("ko", "Korean", "🇰🇷"),
    Language::new("zh", "Chinese", "🇨🇳"),
    Language::new("ar", "Arabic", "🇸🇦"),
    Language::new("hi", "Hindi", "🇮🇳"),
    Language::new("nl", "Dutch", "🇳🇱"),
    Language::new("sv", "Swedish", "🇸🇪"),
    Language::new("pl", "Polish", "🇵🇱"),
    Language::new("tr", "Turkish", "🇹🇷"),
    Language::new("el", "Greek", "🇬🇷"),
    Language::new("he", "Hebrew", "🇮🇱"),
    Language::new("th", "Thai", "🇹🇭"),
    Language::new("vi", "Vietnamese", "🇻🇳"),
];

/// All catalog entries in picker order
pub fn languages() -> &'static [Language] {
    &LANGUAGES
}

/// Look up a catalog entry by code
///
/// Region and script subtags are ignored, so `es-MX` finds Spanish.
pub fn find_language(code: &str) -> Option<&'static Language> {
    let code = normalize_locale(code);
    LANGUAGES.iter().find(|language| language.code == code)
}

/// Display name for a language code, or the uppercased code when unknown
pub fn get_language_name(code: &str) -> String {
    find_language(code)
        .map(|language| language.name.to_string())
        .unwrap_or_else(|| code.to_uppercase())
}

/// Flag glyph for a language code, or a globe when unknown
pub fn get_language_flag(code: &str) -> &'static str {
    find_language(code)
        .map(|language| language.flag)
        .unwrap_or(FALLBACK_FLAG)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_has_twenty_unique_codes() {
        assert_eq!(languages().len(), 20);
        let codes: HashSet<_> = languages().iter().map(|l| l.code).collect();
        assert_eq!(codes.len(), 20);
    }

    #[test]
    fn test_catalog_starts_with_baseline() {
        assert_eq!(languages()[0].code, BASELINE_LANGUAGE);
    }

    #[test]
    fn test_known_names() {
        assert_eq!(get_language_name("en"), "English");
        assert_eq!(get_language_name("ja"), "Japanese");
        assert_eq!(get_language_name("vi"), "Vietnamese");
    }

    #[test]
    fn test_unknown_name_is_uppercased_code() {
        assert_eq!(get_language_name("xx"), "XX");
        assert_eq!(get_language_name("tlh"), "TLH");
    }

    #[test]
    fn test_known_flags() {
        assert_eq!(get_language_flag("fr"), "🇫🇷");
        assert_eq!(get_language_flag("de"), "🇩🇪");
    }

    #[test]
    fn test_unknown_flag_is_globe() {
        assert_eq!(get_language_flag("xx"), FALLBACK_FLAG);
        assert_eq!(get_language_flag(""), FALLBACK_FLAG);
    }

    #[test]
    fn test_lookup_ignores_region_and_case() {
        assert_eq!(get_language_name("es-MX"), "Spanish");
        assert_eq!(get_language_name("PT-br"), "Portuguese");
        assert_eq!(find_language("zh-Hans").map(|l| l.code), Some("zh"));
    }

    #[test]
    fn test_language_serializes_for_ui() {
        let json = serde_json::to_value(find_language("es").unwrap()).unwrap();
        assert_eq!(json["code"], "es");
        assert_eq!(json["name"], "Spanish");
        assert_eq!(json["flag"], "🇪🇸");
    }
}
