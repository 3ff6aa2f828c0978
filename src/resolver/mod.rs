//! Translation key resolution and message formatting
//!
//! Given a key, the active language and the fallback language, resolution
//! picks a template and substitutes interpolation parameters into it.
//! The whole module is pure: no I/O, no state, identical inputs always
//! produce identical outputs.
//!
//! # Template format
//!
//! A placeholder is a bare identifier wrapped in double curly braces,
//! `{{name}}`, where the identifier matches `[A-Za-z_][A-Za-z0-9_]*`.
//! There is no escape sequence and no expression syntax; braces that do
//! not form a well-formed placeholder pass through untouched. A
//! placeholder with no matching parameter is left literal in the output.
//! Substituted values are inserted verbatim and never re-scanned, so a
//! value containing `{{...}}` cannot trigger further expansion.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::{Captures, Regex};
use tracing::debug;

use crate::registry::Registry;
use crate::utils::logging::log_missing_key;

/// Interpolation parameters for message formatting.
///
/// Values are plain strings; numeric parameters are formatted by the
/// caller before insertion.
pub type TranslationParams = HashMap<String, String>;

fn placeholder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\{\{([A-Za-z_][A-Za-z0-9_]*)\}\}").expect("placeholder pattern is valid")
    })
}

/// Resolve a translation key against the registry.
///
/// Lookup order: the active `language`, then `fallback`, then the literal
/// key itself. A missing key is therefore visibly diagnosable in the
/// output instead of silently blank, and this function never fails.
pub fn resolve(
    registry: &Registry,
    key: &str,
    language: &str,
    fallback: &str,
    params: Option<&TranslationParams>,
) -> String {
    let template = match registry.template(language, key) {
        Some(template) => template,
        None => match registry.template(fallback, key) {
            Some(template) => {
                debug!(key = key, language = language, fallback = fallback,
                       "Translation key resolved via fallback language");
                template
            }
            None => {
                log_missing_key(key, language, fallback);
                return interpolate(key, params);
            }
        },
    };

    interpolate(&template, params)
}

/// Substitute interpolation parameters into a template.
///
/// Each `{{name}}` placeholder whose name exists in `params` is replaced
/// with the parameter value; placeholders with no matching parameter stay
/// literal. The scan runs over the original template only, so inserted
/// values are never expanded recursively.
pub fn interpolate(template: &str, params: Option<&TranslationParams>) -> String {
    let Some(params) = params else {
        return template.to_string();
    };
    if params.is_empty() || !template.contains("{{") {
        return template.to_string();
    }

    placeholder_pattern()
        .replace_all(template, |caps: &Captures<'_>| match params.get(&caps[1]) {
            Some(value) => value.clone(),
            None => caps[0].to_string(),
        })
        .into_owned()
}
