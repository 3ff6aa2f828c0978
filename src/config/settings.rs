//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use serde::{Deserialize, Serialize};

/// Main configuration structure for a host embedding the core
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub locale: LocaleConfig,
    pub logging: LoggingConfig,
    pub preferences: Option<PreferencesConfig>,
}

/// Localization configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LocaleConfig {
    /// Language active when a session starts
    pub initial_language: String,
    /// Language consulted when a key is absent in the active language
    pub fallback_language: String,
    /// Languages the loader will look for resource files for
    pub supported_languages: Vec<String>,
    /// Directory holding one `<language>.json` file per language
    pub resource_dir: String,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub file_path: String,
}

/// Preference persistence configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PreferencesConfig {
    /// JSON file the preference store reads and writes
    pub file_path: String,
    /// Key under which the chosen language is remembered
    pub language_key: String,
}

impl Settings {
    /// Load settings from configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("langswitch").required(false))
            .add_source(config::Environment::with_prefix("LANGSWITCH").separator("__"))
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::LangswitchError> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            locale: LocaleConfig {
                initial_language: "en".to_string(),
                fallback_language: "en".to_string(),
                supported_languages: vec!["en".to_string()],
                resource_dir: "locales".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file_path: "logs".to_string(),
            },
            preferences: None,
        }
    }
}
