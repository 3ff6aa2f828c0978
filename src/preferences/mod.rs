//! Preference persistence
//!
//! A generic string key-value capability the composition point can use
//! to remember the user's last-chosen language across sessions. The
//! localization core never depends on it; a host wires it up as a
//! [`Session`](crate::session::Session) subscriber if persistence is
//! wanted.
//!
//! Read and write errors are swallowed and logged, falling back to the
//! caller-supplied default. A broken preference file must never take the
//! host down over something as cosmetic as a remembered language.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing::warn;

/// Generic key-value persistence capability
pub trait PreferenceStore: Send + Sync {
    /// Read a stored value. `None` when absent or unreadable.
    fn get(&self, key: &str) -> Option<String>;

    /// Store a value. Failures are swallowed and logged.
    fn set(&self, key: &str, value: &str);

    /// Read a stored value, falling back to a default
    fn get_or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_string())
    }
}

/// In-memory store for tests and hosts without durable storage
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(key.to_string(), value.to_string());
    }
}

/// File-backed store holding a single flat JSON object
#[derive(Debug)]
pub struct FilePreferences {
    path: PathBuf,
}

impl FilePreferences {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_all(&self) -> HashMap<String, String> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return HashMap::new(),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Failed to read preferences");
                return HashMap::new();
            }
        };

        match serde_json::from_str(&content) {
            Ok(values) => values,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Preferences file is corrupt, ignoring");
                HashMap::new()
            }
        }
    }
}

impl PreferenceStore for FilePreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.read_all().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut values = self.read_all();
        values.insert(key.to_string(), value.to_string());

        let serialized = match serde_json::to_string_pretty(&values) {
            Ok(serialized) => serialized,
            Err(e) => {
                warn!(key = key, error = %e, "Failed to serialize preferences");
                return;
            }
        };
        if let Err(e) = std::fs::write(&self.path, serialized) {
            warn!(path = %self.path.display(), error = %e, "Failed to write preferences");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_round_trip() {
        let store = MemoryPreferences::new();
        assert_eq!(store.get("language"), None);
        assert_eq!(store.get_or("language", "en"), "en");

        store.set("language", "pt-BR");
        assert_eq!(store.get("language"), Some("pt-BR".to_string()));
        assert_eq!(store.get_or("language", "en"), "pt-BR");
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilePreferences::new(dir.path().join("prefs.json"));

        store.set("language", "pt-BR");
        store.set("theme", "dark");
        assert_eq!(store.get("language"), Some("pt-BR".to_string()));
        assert_eq!(store.get("theme"), Some("dark".to_string()));
    }

    #[test]
    fn test_missing_file_yields_default() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilePreferences::new(dir.path().join("absent.json"));
        assert_eq!(store.get_or("language", "en"), "en");
    }

    #[test]
    fn test_corrupt_file_yields_default_and_is_recoverable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "{{{ not json").unwrap();

        let store = FilePreferences::new(&path);
        assert_eq!(store.get_or("language", "en"), "en");

        // Writing replaces the corrupt file.
        store.set("language", "pt-BR");
        assert_eq!(store.get("language"), Some("pt-BR".to_string()));
    }
}
