//! langswitch — localization core
//!
//! This library provides the localization core for a host application:
//! a registry of per-language translation resources, key resolution with
//! `{{placeholder}}` interpolation and fallback-language handling, and a
//! session that tracks the active language and notifies subscribers on
//! every switch.
//!
//! A host composes the pieces once at startup:
//!
//! ```no_run
//! use langswitch::{load_registry, LocaleConfig, Session, TranslationParams};
//!
//! # async fn compose(config: LocaleConfig) -> langswitch::Result<()> {
//! let registry = load_registry(&config).await?;
//! let session = Session::new(registry, "pt-BR", "en")?;
//!
//! let params = TranslationParams::from_iter([("name".to_string(), "Ana".to_string())]);
//! let text = session.translate_with("greeting", Some(&params));
//!
//! session.subscribe(|language| {
//!     // a rendering layer re-renders, a preference store persists, ...
//!     let _ = language;
//! });
//! session.set_language("en")?;
//! # Ok(())
//! # }
//! ```
//!
//! There is no global instance: sessions are explicit values owned by
//! the composition root, so tests and multi-tenant hosts can run several
//! independently.

pub mod config;
pub mod loader;
pub mod preferences;
pub mod registry;
pub mod resolver;
pub mod session;
pub mod utils;

// Re-export commonly used types
pub use config::{LocaleConfig, Settings};
pub use loader::load_registry;
pub use preferences::{FilePreferences, MemoryPreferences, PreferenceStore};
pub use registry::{Registry, ResourceSet};
pub use resolver::{interpolate, resolve, TranslationParams};
pub use session::{Session, SubscriptionHandle};
pub use utils::errors::{LangswitchError, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
