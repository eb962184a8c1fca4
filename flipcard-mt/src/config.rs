//! Translator configuration
//!
//! Everything is read from environment variables. A missing API key is not
//! an error: the client then runs in pass-through mode.

use crate::error::{MtError, MtResult};
use crate::rate_limiter::MIN_INTERVAL;
use std::time::Duration;

pub const API_KEY_VAR: &str = "FLIPCARD_TRANSLATE_API_KEY";
pub const BASE_URL_VAR: &str = "FLIPCARD_TRANSLATE_URL";
pub const MIN_INTERVAL_VAR: &str = "FLIPCARD_TRANSLATE_MIN_INTERVAL_MS";
pub const TIMEOUT_VAR: &str = "FLIPCARD_TRANSLATE_TIMEOUT_SECS";

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

#[derive(Clone, PartialEq)]
pub struct TranslatorConfig {
    /// Bearer credential for the provider; `None` selects pass-through mode
    pub api_key: Option<String>,
    pub base_url: String,
    /// Spacing enforced between provider calls, never below [`MIN_INTERVAL`]
    pub min_interval: Duration,
    /// Per-request timeout; `None` keeps the HTTP client's default
    pub timeout: Option<Duration>,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            min_interval: MIN_INTERVAL,
            timeout: None,
        }
    }
}

impl TranslatorConfig {
    /// Load the configuration from the process environment
    pub fn from_env() -> MtResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load the configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> MtResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        config.api_key = lookup(API_KEY_VAR).filter(|key| !key.trim().is_empty());

        if let Some(url) = lookup(BASE_URL_VAR).filter(|url| !url.trim().is_empty()) {
            config.base_url = url.trim().to_string();
        }

        if let Some(ms) = lookup(MIN_INTERVAL_VAR) {
            let min_interval = Duration::from_millis(parse_number(MIN_INTERVAL_VAR, &ms)?);
            if min_interval < MIN_INTERVAL {
                return Err(MtError::ConfigError(format!(
                    "{} must be at least {}, got '{}'",
                    MIN_INTERVAL_VAR,
                    MIN_INTERVAL.as_millis(),
                    ms
                )));
            }
            config.min_interval = min_interval;
        }

        if let Some(secs) = lookup(TIMEOUT_VAR) {
            config.timeout = Some(Duration::from_secs(parse_number(TIMEOUT_VAR, &secs)?));
        }

        Ok(config)
    }

    pub fn with_api_key(mut self, api_key: &str) -> Self {
        self.api_key = Some(api_key.to_string());
        self
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    /// Set the call spacing, raising it to [`MIN_INTERVAL`] if shorter
    pub fn with_min_interval(mut self, min_interval: Duration) -> Self {
        self.min_interval = min_interval.max(MIN_INTERVAL);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Whether a usable credential is present
    pub fn has_credential(&self) -> bool {
        self.api_key
            .as_deref()
            .is_some_and(|key| !key.trim().is_empty())
    }
}

fn parse_number(name: &str, value: &str) -> MtResult<u64> {
    value.trim().parse().map_err(|_| {
        MtError::ConfigError(format!("{} must be a whole number, got '{}'", name, value))
    })
}

impl std::fmt::Debug for TranslatorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranslatorConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("base_url", &self.base_url)
            .field("min_interval", &self.min_interval)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = TranslatorConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, TranslatorConfig::default());
        assert!(!config.has_credential());
        assert_eq!(config.min_interval, Duration::from_millis(500));
        assert_eq!(config.timeout, None);
    }

    #[test]
    fn test_reads_all_variables() {
        let config = TranslatorConfig::from_lookup(lookup_from(&[
            (API_KEY_VAR, "abc123"),
            (BASE_URL_VAR, " https://mt.example.org/v1 "),
            (MIN_INTERVAL_VAR, "750"),
            (TIMEOUT_VAR, "10"),
        ]))
        .unwrap();

        assert_eq!(config.api_key.as_deref(), Some("abc123"));
        assert_eq!(config.base_url, "https://mt.example.org/v1");
        assert_eq!(config.min_interval, Duration::from_millis(750));
        assert_eq!(config.timeout, Some(Duration::from_secs(10)));
        assert!(config.has_credential());
    }

    #[test]
    fn test_blank_key_means_unconfigured() {
        let config = TranslatorConfig::from_lookup(lookup_from(&[(API_KEY_VAR, "  ")])).unwrap();
        assert_eq!(config.api_key, None);
    }

    #[test]
    fn test_malformed_interval_is_config_error() {
        match TranslatorConfig::from_lookup(lookup_from(&[(MIN_INTERVAL_VAR, "fast")])) {
            Err(MtError::ConfigError(msg)) => assert!(msg.contains(MIN_INTERVAL_VAR)),
            other => panic!("Expected ConfigError, got {:?}", other),
        }
    }

    #[test]
    fn test_interval_below_floor_is_config_error() {
        for value in ["0", "499"] {
            match TranslatorConfig::from_lookup(lookup_from(&[(MIN_INTERVAL_VAR, value)])) {
                Err(MtError::ConfigError(msg)) => assert!(msg.contains("at least 500")),
                other => panic!("Expected ConfigError, got {:?}", other),
            }
        }

        let config =
            TranslatorConfig::from_lookup(lookup_from(&[(MIN_INTERVAL_VAR, "500")])).unwrap();
        assert_eq!(config.min_interval, MIN_INTERVAL);
    }

    #[test]
    fn test_with_min_interval_keeps_floor() {
        let config = TranslatorConfig::default().with_min_interval(Duration::ZERO);
        assert_eq!(config.min_interval, MIN_INTERVAL);

        let config = TranslatorConfig::default().with_min_interval(Duration::from_secs(2));
        assert_eq!(config.min_interval, Duration::from_secs(2));
    }

    #[test]
    fn test_debug_masks_key() {
        let config = TranslatorConfig::default().with_api_key("top-secret");
        let debug_str = format!("{:?}", config);
        assert!(debug_str.contains("***"));
        assert!(!debug_str.contains("top-secret"));
    }
}
