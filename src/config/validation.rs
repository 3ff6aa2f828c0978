//! Configuration validation module
//!
//! Validation runs at startup, before any resources are loaded, so a
//! misconfigured host fails fast instead of degrading at translate time.

use crate::utils::errors::{LangswitchError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_locale_config(&settings.locale)?;
    validate_logging_config(&settings.logging)?;

    if let Some(ref preferences) = settings.preferences {
        validate_preferences_config(preferences)?;
    }

    Ok(())
}

/// Validate localization configuration
fn validate_locale_config(config: &super::LocaleConfig) -> Result<()> {
    if config.supported_languages.is_empty() {
        return Err(LangswitchError::Config(
            "At least one supported language is required".to_string(),
        ));
    }

    if config.initial_language.is_empty() {
        return Err(LangswitchError::Config(
            "Initial language is required".to_string(),
        ));
    }

    if config.fallback_language.is_empty() {
        return Err(LangswitchError::Config(
            "Fallback language is required".to_string(),
        ));
    }

    if !config.supported_languages.contains(&config.initial_language) {
        return Err(LangswitchError::Config(
            "Initial language must be in supported languages list".to_string(),
        ));
    }

    if !config.supported_languages.contains(&config.fallback_language) {
        return Err(LangswitchError::Config(
            "Fallback language must be in supported languages list".to_string(),
        ));
    }

    if config.resource_dir.is_empty() {
        return Err(LangswitchError::Config(
            "Resource directory is required".to_string(),
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(LangswitchError::Config("Log level is required".to_string()));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(LangswitchError::Config(format!(
            "Invalid log level: {}. Valid levels: {:?}",
            config.level, valid_levels
        )));
    }

    Ok(())
}

/// Validate preference persistence configuration
fn validate_preferences_config(config: &super::PreferencesConfig) -> Result<()> {
    if config.file_path.is_empty() {
        return Err(LangswitchError::Config(
            "Preferences file path is required".to_string(),
        ));
    }

    if config.language_key.is_empty() {
        return Err(LangswitchError::Config(
            "Preferences language key is required".to_string(),
        ));
    }

    Ok(())
}
