use thiserror::Error;

/// Error types for the translation client
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MtError {
    /// Caller passed text that cannot be translated (empty or whitespace-only)
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// Configuration could not be loaded or is malformed
    #[error("Configuration error: {0}")]
    ConfigError(String),
    /// Transport-level failure talking to the provider
    #[error("Network error: {0}")]
    NetworkError(String),
    /// Provider answered with a non-success status
    #[error("Provider error ({status}): {body}")]
    ProviderError { status: u16, body: String },
    /// Provider answered but the body could not be used
    #[error("Translation error: {0}")]
    TranslationError(String),
}

impl From<reqwest::Error> for MtError {
    fn from(err: reqwest::Error) -> Self {
        MtError::NetworkError(err.to_string())
    }
}

/// Result type for translation operations
pub type MtResult<T> = Result<T, MtError>;
