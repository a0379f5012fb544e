//! CLI command implementations.
//!
//! Each command returns the text to print so the binary stays a thin shell
//! and the output can be asserted on directly.

use std::fmt::Write as _;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use tracing::info;

use crate::cache::NavigationCache;
use crate::capability::{Capability, CapabilitySet};
use crate::config::Config;
use crate::labels::{KeyLabels, LabelResolver, TranslationTable};
use crate::menu::{Expansion, MenuSpec, NavigationBuilder, NavigationEntry};
use crate::router::{MemoryHistory, Navigator};

/// Everything loaded once from configuration.
pub struct Runtime {
    pub spec: Arc<MenuSpec>,
    pub labels: Arc<dyn LabelResolver>,
    pub expansion: Expansion,
    pub cache: NavigationCache,
}

impl Runtime {
    /// Load the menu and labels named by `config`.
    pub fn load(config: &Config) -> Result<Self> {
        let spec = match &config.menu_file {
            Some(path) => MenuSpec::load(path)
                .with_context(|| format!("failed to load menu from {}", path.display()))?,
            None => MenuSpec::hospital(),
        };

        let labels: Arc<dyn LabelResolver> = match &config.labels_file {
            Some(path) => {
                let table = TranslationTable::new(&config.language);
                table
                    .load_file(path)
                    .with_context(|| format!("failed to load labels from {}", path.display()))?;
                Arc::new(table)
            }
            None => Arc::new(KeyLabels),
        };

        info!(
            nodes = spec.node_count(),
            language = %config.language,
            expansion = ?config.expansion,
            "navigation runtime loaded"
        );

        Ok(Self {
            spec: Arc::new(spec),
            labels,
            expansion: config.expansion,
            cache: NavigationCache::new(config.cache_capacity),
        })
    }

    /// A builder bound to `navigator`.
    pub fn builder(&self, navigator: Arc<dyn Navigator>) -> NavigationBuilder {
        NavigationBuilder::new(Arc::clone(&self.spec), navigator, Arc::clone(&self.labels))
            .with_expansion(self.expansion)
            .with_cache(self.cache.clone())
    }
}

/// Turn `--grant` arguments into a capability set.
pub fn resolve_grants(names: &[String], all: bool) -> Result<CapabilitySet> {
    if all {
        return Ok(CapabilitySet::all());
    }
    CapabilitySet::parse_names(names).context("invalid --grant")
}

/// Render the navigation entries at `path`.
pub fn cmd_render(
    runtime: &Runtime,
    grants: &CapabilitySet,
    path: &str,
    json: bool,
) -> Result<String> {
    let navigator: Arc<dyn Navigator> = Arc::new(MemoryHistory::new(path));
    let entries = runtime.builder(navigator).build_current(grants);

    if json {
        return serde_json::to_string_pretty(&entries).context("failed to serialize entries");
    }
    Ok(render_table(&entries))
}

fn render_table(entries: &[NavigationEntry]) -> String {
    let mut out = String::new();
    if entries.is_empty() {
        out.push_str("No navigation entries.\n");
        return out;
    }

    let _ = writeln!(out, "{:<4} {:<20} {}", "", "ROUTE", "LABEL");
    let _ = writeln!(out, "{}", "-".repeat(60));
    for entry in entries {
        let marker = if entry.active {
            "*"
        } else if entry.contains_active {
            "+"
        } else {
            ""
        };
        let indent = "  ".repeat(entry.depth);
        let _ = writeln!(
            out,
            "{:<4} {:<20} {indent}{}",
            marker, entry.route, entry.label
        );
    }
    out
}

/// List every capability wire name.
pub fn cmd_capabilities() -> String {
    let mut out = String::new();
    for cap in Capability::ALL {
        let _ = writeln!(out, "{cap}");
    }
    out
}

/// Validate a menu definition file (or the built-in menu).
pub fn cmd_validate(menu: Option<&Path>) -> Result<String> {
    let spec = match menu {
        Some(path) => MenuSpec::load(path)
            .with_context(|| format!("invalid menu definition {}", path.display()))?,
        None => {
            let spec = MenuSpec::hospital();
            spec.validate().context("built-in menu is invalid")?;
            spec
        }
    };
    Ok(format!(
        "Menu OK: {} top-level entries, {} nodes.\n",
        spec.roots.len(),
        spec.node_count()
    ))
}

/// Activate the entry labelled `label_key` while at `from`.
///
/// Returns the router location after activation.
pub fn cmd_navigate(
    runtime: &Runtime,
    grants: &CapabilitySet,
    from: &str,
    label_key: &str,
) -> Result<String> {
    let history = Arc::new(MemoryHistory::new(from));
    let navigator: Arc<dyn Navigator> = history.clone();
    let entries = runtime.builder(navigator).build_current(grants);

    let Some(entry) = entries.iter().find(|e| e.label_key == label_key) else {
        bail!("entry '{label_key}' is not visible at {from}");
    };
    entry.activate();

    Ok(format!("{}\n", history.current_path()))
}
