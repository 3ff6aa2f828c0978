//! Translation resource storage
//!
//! This module holds the per-language translation resources: a
//! [`ResourceSet`] maps translation keys to template strings for exactly
//! one language, and the [`Registry`] indexes ResourceSets by language
//! code. Language codes are opaque string keys (`"en"`, `"pt-BR"`) and
//! are never parsed for structure.
//!
//! Absence is a first-class result here: looking up an unknown language
//! or key returns `None` rather than failing, because the resolver has
//! to fall through gracefully.

use std::collections::HashMap;
use std::sync::RwLock;

use serde::Deserialize;
use tracing::debug;

/// The full key -> template mapping for one language.
///
/// Immutable once registered; re-registering a language replaces the
/// whole set, it does not merge.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct ResourceSet {
    templates: HashMap<String, String>,
}

impl ResourceSet {
    /// Create an empty resource set
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the template for a translation key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.templates.get(key).map(String::as_str)
    }

    /// Number of translation keys in this set
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Whether this set holds no keys
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Iterate over `(key, template)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.templates
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for ResourceSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            templates: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// All registered ResourceSets, indexed by language code.
///
/// Interior locking makes registration possible through a shared
/// reference after a `Session` has taken ownership, and keeps concurrent
/// `translate` readers safe. Registration is append-or-replace only;
/// languages are never removed.
#[derive(Debug, Default)]
pub struct Registry {
    sets: RwLock<HashMap<String, ResourceSet>>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the ResourceSet for a language.
    ///
    /// Overwriting an existing language is silent and intentional.
    pub fn register(&self, language: impl Into<String>, resources: ResourceSet) {
        let language = language.into();
        debug!(
            language = %language,
            key_count = resources.len(),
            "Registered translation resources"
        );
        self.sets
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(language, resources);
    }

    /// Get a clone of the ResourceSet for a language, if registered
    pub fn get(&self, language: &str) -> Option<ResourceSet> {
        self.sets
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(language)
            .cloned()
    }

    /// Look up a single template without cloning the whole set
    pub fn template(&self, language: &str, key: &str) -> Option<String> {
        self.sets
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(language)
            .and_then(|set| set.get(key))
            .map(str::to_string)
    }

    /// Whether a language has a registered ResourceSet
    pub fn contains(&self, language: &str) -> bool {
        self.sets
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .contains_key(language)
    }

    /// Registered language codes, sorted for stable output
    pub fn languages(&self) -> Vec<String> {
        let mut languages: Vec<String> = self
            .sets
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .keys()
            .cloned()
            .collect();
        languages.sort();
        languages
    }

    /// Number of registered languages
    pub fn len(&self) -> usize {
        self.sets.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// Whether no languages are registered
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
