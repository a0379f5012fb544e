//! Configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};

use crate::cache::DEFAULT_CAPACITY;
use crate::menu::Expansion;

/// Application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Menu definition file (.yml/.yaml/.json). When None, the built-in
    /// hospital menu is used.
    pub menu_file: Option<PathBuf>,

    /// Label file for `language`. When None, label keys are shown as-is.
    pub labels_file: Option<PathBuf>,

    /// Language of the label file (default: "en").
    pub language: String,

    /// Sub-entry expansion: "all" (default) or "active-section".
    pub expansion: Expansion,

    /// Maximum cached derivations (default: 1024).
    pub cache_capacity: u64,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let menu_file = lookup("CARENAV_MENU_FILE")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        let labels_file = lookup("CARENAV_LABELS_FILE")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        let language = lookup("CARENAV_LANGUAGE").unwrap_or_else(|| "en".to_string());

        let expansion = lookup("CARENAV_EXPANSION")
            .map(|v| v.parse::<Expansion>())
            .transpose()
            .map_err(|e| anyhow!("CARENAV_EXPANSION is invalid: {e}"))?
            .unwrap_or_default();

        let cache_capacity = lookup("CARENAV_CACHE_CAPACITY")
            .unwrap_or_else(|| DEFAULT_CAPACITY.to_string())
            .parse()
            .context("CARENAV_CACHE_CAPACITY must be a valid u64")?;

        Ok(Self {
            menu_file,
            labels_file,
            language,
            expansion,
            cache_capacity,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            menu_file: None,
            labels_file: None,
            language: "en".to_string(),
            expansion: Expansion::All,
            cache_capacity: DEFAULT_CAPACITY,
        }
    }
}
