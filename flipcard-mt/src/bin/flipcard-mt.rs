use clap::{Arg, ArgAction, Command};
use flipcard_lang::{AUTO_DETECT, get_language_flag, get_language_name, languages};
use flipcard_mt::{
    ConnectionStatus, MockMode, MockTranslator, RateLimiter, SystemClock, TranslationClient,
    TranslationService, TranslatorConfig,
};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("flipcard-mt")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Translate flashcard text through the flipcard translation client")
        .arg(
            Arg::new("target-locale")
                .help("Target language code (e.g., es, fr, de)")
                .required_unless_present_any(["languages", "test-connection"])
                .index(1),
        )
        .arg(
            Arg::new("texts")
                .help("Texts to translate, in order")
                .num_args(1..)
                .required_unless_present_any(["languages", "test-connection"])
                .index(2),
        )
        .arg(
            Arg::new("source-locale")
                .long("source")
                .short('s')
                .help("Source language code (default: auto)")
                .default_value(AUTO_DETECT),
        )
        .arg(
            Arg::new("mock")
                .long("mock")
                .short('m')
                .help("Use the mock translator instead of the configured API")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log cache, rate limiter and provider activity")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("languages")
                .long("languages")
                .short('l')
                .help("List the supported languages and exit")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("test-connection")
                .long("test-connection")
                .help("Check that the translation API answers and exit")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let verbose = matches.get_flag("verbose");
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if matches.get_flag("languages") {
        for language in languages() {
            println!("{} {:<4} {}", language.flag, language.code, language.name);
        }
        return Ok(());
    }

    let config = TranslatorConfig::from_env()?;
    let service = if matches.get_flag("mock") {
        let limiter = Arc::new(RateLimiter::new(config.min_interval, Arc::new(SystemClock)));
        let mock = Arc::new(MockTranslator::new(MockMode::Suffix));
        TranslationService::new(TranslationClient::new(mock, limiter))
    } else {
        if !config.has_credential() {
            eprintln!("⚠️  No API key set, texts will be returned untranslated");
            eprintln!("   Set it with: export FLIPCARD_TRANSLATE_API_KEY=your_api_key");
            eprintln!("   Or use --mock to use the mock translator");
        }
        TranslationService::from_config(&config)?
    };

    let session = service.session(flipcard_lang::BASELINE_LANGUAGE);

    if matches.get_flag("test-connection") {
        return match session.test_connection().await {
            ConnectionStatus::Connected(sample) => {
                println!("✅ Connected to {} (\"Hello\" → \"{}\")", service.client().provider_name(), sample);
                Ok(())
            }
            ConnectionStatus::Unconfigured => {
                println!("⚠️  No translation API key configured");
                Ok(())
            }
            ConnectionStatus::Failed => Err("Translation service is not responding".into()),
        };
    }

    // Both are required by clap unless one of the early-exit flags was given.
    let target_locale = matches
        .get_one::<String>("target-locale")
        .ok_or("missing target language")?;
    let source_locale = matches
        .get_one::<String>("source-locale")
        .ok_or("missing source language")?;
    let texts: Vec<String> = matches
        .get_many::<String>("texts")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    if verbose {
        eprintln!(
            "🌍 {} → {} {}",
            source_locale,
            get_language_flag(target_locale),
            get_language_name(target_locale)
        );
    }

    let translated = session
        .translate_multiple(&texts, target_locale, source_locale)
        .await;

    for line in &translated {
        println!("{}", line);
    }

    if let Some(error) = session.error() {
        eprintln!("❌ {}", error);
    }

    if verbose {
        let stats = service.cache().stats();
        eprintln!(
            "📦 Cache: {} entries, {} hits, {} misses",
            stats.entries, stats.hits, stats.misses
        );
    }

    Ok(())
}
