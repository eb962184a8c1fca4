//! Locale code helpers shared by the catalog and the translation client

/// Source-language hint that asks the provider to detect the language
pub const AUTO_DETECT: &str = "auto";

/// Language the study content is authored in
///
/// Requests targeting it never need a translation.
pub const BASELINE_LANGUAGE: &str = "en";

/// Normalize a locale code by stripping region information
///
/// Converts locale codes from BCP 47 format to the base language:
/// - `en-US` → `en`
/// - `zh-Hans` → `zh`
/// - `pt_BR` → `pt`
/// - `en` → `en` (unchanged)
pub fn normalize_locale(locale: &str) -> String {
    locale
        .split(['-', '_'])
        .next()
        .unwrap_or(locale)
        .trim()
        .to_lowercase()
}

/// Whether a source-language hint means "let the provider detect it"
pub fn is_auto(locale: &str) -> bool {
    locale.trim().is_empty() || locale.eq_ignore_ascii_case(AUTO_DETECT)
}
