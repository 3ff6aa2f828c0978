//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging
//! utilities for hosts embedding the localization core.

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;
use crate::utils::errors::Result;

/// Initialize logging based on configuration
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let file_appender = tracing_appender::rolling::daily(&config.file_path, "langswitch.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(tracing_subscriber::fmt::layer().with_writer(non_blocking))
        .init();

    info!("Logging initialized with level: {}", config.level);
    Ok(())
}

/// Log a completed language switch with structured data
pub fn log_language_switch(from: &str, to: &str, subscribers_notified: usize) {
    info!(
        from = from,
        to = to,
        subscribers_notified = subscribers_notified,
        "Language switched"
    );
}

/// Log a translation key that resolved to its literal form
pub fn log_missing_key(key: &str, language: &str, fallback: &str) {
    warn!(
        key = key,
        language = language,
        fallback = fallback,
        "Translation key missing in both languages"
    );
}
