//! Label resolution collaborator.
//!
//! Menu nodes carry opaque label keys (e.g. `patients.newPatient`); display
//! text comes from a [`LabelResolver`]. The navigation model never produces
//! final strings itself.

use std::path::Path;

use dashmap::DashMap;
use serde_json::Value as JsonValue;
use tracing::{debug, info};

use crate::error::{NavError, NavResult};

/// Resolves label keys to display text.
pub trait LabelResolver: Send + Sync {
    /// Display text for `key`.
    fn resolve(&self, key: &str) -> String;

    /// Distinguishes resolvers whose output differs (e.g. by language) so
    /// cached derivations are not shared between them.
    fn scope(&self) -> &str {
        ""
    }
}

/// Resolver that returns the key unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyLabels;

impl LabelResolver for KeyLabels {
    fn resolve(&self, key: &str) -> String {
        key.to_string()
    }
}

/// Translations for a single language.
///
/// Nested documents are flattened into dotted keys, so
/// `patients: { newPatient: "New Patient" }` provides `patients.newPatient`.
#[derive(Debug)]
pub struct TranslationTable {
    language: String,
    entries: DashMap<String, String>,
}

impl TranslationTable {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            entries: DashMap::new(),
        }
    }

    pub fn insert(&self, key: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(key.into(), text.into());
    }

    /// Merge a YAML document (JSON is valid YAML) into the table.
    ///
    /// Returns the number of labels loaded.
    pub fn load_str(&self, contents: &str) -> NavResult<usize> {
        let doc: JsonValue = serde_yml::from_str(contents).map_err(|e| NavError::Parse {
            format: "labels",
            details: e.to_string(),
        })?;

        let mut count = 0;
        flatten("", &doc, &mut |key, text| {
            self.entries.insert(key, text);
            count += 1;
        });
        Ok(count)
    }

    /// Merge a label file into the table.
    pub fn load_file(&self, path: &Path) -> NavResult<usize> {
        let contents = std::fs::read_to_string(path).map_err(|source| NavError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let count = self.load_str(&contents)?;
        info!(language = %self.language, path = %path.display(), count, "loaded labels");
        Ok(count)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl LabelResolver for TranslationTable {
    /// Falls back to the key when no translation exists.
    fn resolve(&self, key: &str) -> String {
        if let Some(text) = self.entries.get(key) {
            return text.clone();
        }
        debug!(key = %key, language = %self.language, "missing label");
        key.to_string()
    }

    fn scope(&self) -> &str {
        &self.language
    }
}

fn flatten(prefix: &str, value: &JsonValue, emit: &mut impl FnMut(String, String)) {
    match value {
        JsonValue::Object(map) => {
            for (k, v) in map {
                let key = if prefix.is_empty() {
                    k.clone()
                } else {
                    format!("{prefix}.{k}")
                };
                flatten(&key, v, emit);
            }
        }
        JsonValue::String(s) if !prefix.is_empty() => emit(prefix.to_string(), s.clone()),
        JsonValue::Number(n) if !prefix.is_empty() => emit(prefix.to_string(), n.to_string()),
        JsonValue::Bool(b) if !prefix.is_empty() => emit(prefix.to_string(), b.to_string()),
        _ => {}
    }
}
