//! Error handling for langswitch
//!
//! This module defines the main error type used throughout the crate
//! and provides a unified error handling strategy.
//!
//! Only configuration-time problems are errors: referencing a language
//! that has no registered resources, or switching languages from inside
//! a change notification. A missing translation key or an unresolved
//! placeholder is a degraded-but-valid result, not an error, and never
//! surfaces through this type.

use thiserror::Error;

/// Main error type for langswitch operations
#[derive(Error, Debug)]
pub enum LangswitchError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Language not registered: {language}")]
    UnknownLanguage { language: String },

    #[error("set_language called from within a change notification")]
    ReentrantSwitch,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for langswitch operations
pub type Result<T> = std::result::Result<T, LangswitchError>;

impl LangswitchError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            LangswitchError::Config(_) => false,
            LangswitchError::UnknownLanguage { .. } => true,
            LangswitchError::ReentrantSwitch => true,
            LangswitchError::Serialization(_) => false,
            LangswitchError::Io(_) => true,
        }
    }
}
