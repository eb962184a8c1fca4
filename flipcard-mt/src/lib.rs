//! Machine translation for the flipcard study app
//!
//! A rate-limited, cached, fault-tolerant client for a remote translation
//! API, and the per-mount session the study UI drives it through.
//!
//! Failures never reach the UI as errors: text that cannot be translated
//! comes back unchanged with confidence 0, and the session records an error
//! message for the UI to show.
//!
//! # Example
//!
//! ```ignore
//! use flipcard_mt::{TranslationService, TranslatorConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let service = TranslationService::from_config(&TranslatorConfig::from_env()?)?;
//!     let session = service.session("en");
//!
//!     let texts = vec!["Hi".to_string(), "Bye".to_string()];
//!     let translated = session.translate_multiple(&texts, "es", "en").await;
//!     println!("{:?} ({})", translated, session.current_language());
//!     Ok(())
//! }
//! ```

pub mod batch;
pub mod cache;
pub mod client;
pub mod clock;
pub mod config;
pub mod data;
pub mod error;
pub mod http_provider;
pub mod mock;
pub mod notify;
pub mod rate_limiter;
pub mod service;
pub mod session;
pub mod translator;

pub use batch::BatchTranslator;
pub use cache::{CacheKey, CacheStats, TranslationCache};
pub use client::TranslationClient;
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::TranslatorConfig;
pub use data::{Flashcard, TranslationResult};
pub use error::{MtError, MtResult};
pub use http_provider::HttpProvider;
pub use mock::{MockMode, MockTranslator};
pub use notify::{Notification, NotificationLevel, Notifier, RecordingNotifier, TracingNotifier};
pub use rate_limiter::{MIN_INTERVAL, RateLimiter};
pub use service::TranslationService;
pub use session::{ConnectionStatus, SessionState, TranslationSession};
pub use translator::MachineTranslator;
