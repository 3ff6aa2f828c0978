//! Translation resource loading
//!
//! Builds a populated [`Registry`] from one `<language>.json` file per
//! supported language. Files hold string leaves, possibly nested:
//!
//! ```json
//! { "commands": { "start": { "welcome": "Hello {{name}}" } } }
//! ```
//!
//! Nested objects are flattened into dot-separated keys at load time
//! (`commands.start.welcome`), so a ResourceSet stays a flat map and
//! lookups need no tree walk.
//!
//! A missing or malformed file for the fallback language is fatal; for
//! any other language it is logged and the language is skipped.

use std::collections::HashMap;
use std::path::Path;

use serde_json::Value;
use tokio::fs;
use tracing::{error, info, warn};

use crate::config::LocaleConfig;
use crate::registry::{Registry, ResourceSet};
use crate::utils::errors::{LangswitchError, Result};

/// Load all resource files named by the configuration into a registry
pub async fn load_registry(config: &LocaleConfig) -> Result<Registry> {
    let registry = Registry::new();
    let resource_dir = Path::new(&config.resource_dir);

    for language in &config.supported_languages {
        let file_path = resource_dir.join(format!("{language}.json"));

        match load_language_file(&file_path).await {
            Ok(resources) => {
                info!(
                    language = %language,
                    key_count = resources.len(),
                    "Loaded translation resources"
                );
                registry.register(language.clone(), resources);
            }
            Err(e) => {
                if language == &config.fallback_language {
                    return Err(LangswitchError::Config(format!(
                        "Failed to load fallback language '{}' from {}: {}",
                        language,
                        file_path.display(),
                        e
                    )));
                }
                warn!(
                    language = %language,
                    path = %file_path.display(),
                    error = %e,
                    "Skipping language, resources could not be loaded"
                );
            }
        }
    }

    Ok(registry)
}

/// Load and flatten a single language file
async fn load_language_file(file_path: &Path) -> Result<ResourceSet> {
    let content = fs::read_to_string(file_path).await?;
    let parsed: Value = serde_json::from_str(&content)?;

    let Value::Object(_) = parsed else {
        return Err(LangswitchError::Config(format!(
            "Invalid resource file format: {} (expected a JSON object)",
            file_path.display()
        )));
    };

    let mut templates = HashMap::new();
    flatten_into("", &parsed, &mut templates);
    Ok(ResourceSet::from_iter(templates))
}

/// Flatten nested JSON objects into dot-separated keys.
///
/// Non-string, non-object leaves (numbers, booleans) are stringified the
/// same way the surrounding host would render them; arrays are ignored
/// with a warning since the template format has no list semantics.
fn flatten_into(prefix: &str, value: &Value, out: &mut HashMap<String, String>) {
    match value {
        Value::Object(map) => {
            for (key, nested) in map {
                let flat_key = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten_into(&flat_key, nested, out);
            }
        }
        Value::String(s) => {
            out.insert(prefix.to_string(), s.clone());
        }
        Value::Array(_) => {
            error!(key = prefix, "Array values are not valid translation templates");
        }
        other => {
            out.insert(prefix.to_string(), other.to_string());
        }
    }
}
