//! The static menu tree and its external definition format.
//!
//! The default tree is [`MenuSpec::hospital`]. Deployments may replace it with
//! a YAML or JSON document of [`MenuDefinition`]s; adding a module is a matter
//! of appending a definition, the matcher and builder need no changes.

use std::collections::HashSet;
use std::hash::{DefaultHasher, Hash, Hasher};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::node::{MatchMode, MenuNode};
use crate::capability::Capability;
use crate::error::{NavError, NavResult};

/// A menu entry as written in a definition file.
///
/// ```yaml
/// - label: labs.label
///   route: /labs
///   children:
///     - label: labs.requests.new
///       route: /labs/new
///       match: exact
///       capability: request:lab
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuDefinition {
    /// Label key handed to the label resolver.
    pub label: String,
    /// Route pattern (e.g., "/labs", "/labs/:id").
    pub route: String,
    /// Required capability wire name (absent = always visible).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capability: Option<Capability>,
    /// `exact` or `prefix` (default).
    #[serde(default, rename = "match")]
    pub match_mode: MatchMode,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MenuDefinition>,
}

impl From<MenuDefinition> for MenuNode {
    fn from(def: MenuDefinition) -> Self {
        MenuNode {
            label_key: def.label,
            route: def.route,
            required_capability: def.capability,
            match_mode: def.match_mode,
            children: def.children.into_iter().map(MenuNode::from).collect(),
        }
    }
}

impl From<&MenuNode> for MenuDefinition {
    fn from(node: &MenuNode) -> Self {
        MenuDefinition {
            label: node.label_key.clone(),
            route: node.route.clone(),
            capability: node.required_capability,
            match_mode: node.match_mode,
            children: node.children.iter().map(MenuDefinition::from).collect(),
        }
    }
}

/// The ordered top level of the navigation tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct MenuSpec {
    pub roots: Vec<MenuNode>,
}

impl MenuSpec {
    pub fn new(roots: Vec<MenuNode>) -> Self {
        Self { roots }
    }

    /// The default clinical navigation tree.
    ///
    /// Sections are ungated; each holds a "create" entry gated by a write-level
    /// capability followed by a "list" entry gated by a read-level one.
    pub fn hospital() -> Self {
        Self::new(vec![
            MenuNode::new("dashboard.label", "/").exact(),
            section(
                "patients.label",
                "/patients",
                ("patients.newPatient", Capability::WritePatients),
                ("patients.patientsList", Capability::ReadPatients),
            ),
            section(
                "scheduling.label",
                "/appointments",
                ("scheduling.appointments.new", Capability::WriteAppointments),
                ("scheduling.appointments.schedule", Capability::ReadAppointments),
            ),
            section(
                "labs.label",
                "/labs",
                ("labs.requests.new", Capability::RequestLab),
                ("labs.requests.label", Capability::ViewLabs),
            ),
            section(
                "incidents.label",
                "/incidents",
                ("incidents.reports.new", Capability::ReportIncident),
                ("incidents.reports.label", Capability::ViewIncidents),
            ),
        ])
    }

    /// Parse a YAML list of menu definitions.
    pub fn from_yaml_str(yaml: &str) -> NavResult<Self> {
        let defs: Vec<MenuDefinition> =
            serde_yml::from_str(yaml).map_err(|e| NavError::Parse {
                format: "yaml",
                details: e.to_string(),
            })?;
        Self::from_definitions(defs)
    }

    /// Parse a JSON array of menu definitions.
    pub fn from_json_str(json: &str) -> NavResult<Self> {
        let defs: Vec<MenuDefinition> =
            serde_json::from_str(json).map_err(|e| NavError::Parse {
                format: "json",
                details: e.to_string(),
            })?;
        Self::from_definitions(defs)
    }

    /// Load a definition file, choosing the format by extension.
    pub fn load(path: &Path) -> NavResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| NavError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let spec = match path.extension().and_then(|e| e.to_str()) {
            Some("yml" | "yaml") => Self::from_yaml_str(&contents)?,
            Some("json") => Self::from_json_str(&contents)?,
            other => {
                return Err(NavError::Parse {
                    format: "menu",
                    details: format!(
                        "unsupported extension {other:?} for {}, expected .yml, .yaml or .json",
                        path.display()
                    ),
                });
            }
        };

        info!(path = %path.display(), nodes = spec.node_count(), "loaded menu definitions");
        Ok(spec)
    }

    /// Build and validate a spec from parsed definitions.
    pub fn from_definitions(defs: Vec<MenuDefinition>) -> NavResult<Self> {
        let spec = Self::new(defs.into_iter().map(MenuNode::from).collect());
        spec.validate()?;
        Ok(spec)
    }

    /// The tree in definition form, for export.
    pub fn to_definitions(&self) -> Vec<MenuDefinition> {
        self.roots.iter().map(MenuDefinition::from).collect()
    }

    /// Check that every node is usable.
    ///
    /// Rejects empty label keys, routes that are not absolute, unnamed
    /// `:` parameters, and siblings that share both route and match mode (the
    /// second could never become active).
    pub fn validate(&self) -> NavResult<()> {
        validate_level(&self.roots)
    }

    /// Total number of nodes in the tree.
    pub fn node_count(&self) -> usize {
        self.roots.iter().map(MenuNode::node_count).sum()
    }

    /// Stable identifier of this tree's contents, used in cache keys.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

fn section(
    label_key: &str,
    route: &str,
    create: (&str, Capability),
    list: (&str, Capability),
) -> MenuNode {
    MenuNode::new(label_key, route)
        .child(
            MenuNode::new(create.0, format!("{route}/new"))
                .exact()
                .requires(create.1),
        )
        .child(MenuNode::new(list.0, route).requires(list.1))
}

fn validate_level(nodes: &[MenuNode]) -> NavResult<()> {
    let mut seen = HashSet::new();

    for node in nodes {
        if node.label_key.trim().is_empty() {
            return Err(NavError::invalid_menu(
                &node.route,
                "label key must not be empty",
            ));
        }
        if !node.route.starts_with('/') {
            return Err(NavError::invalid_menu(
                &node.label_key,
                format!("route '{}' must start with '/'", node.route),
            ));
        }
        if node.route.split('/').any(|seg| seg == ":") {
            return Err(NavError::invalid_menu(
                &node.label_key,
                format!("route '{}' has an unnamed parameter", node.route),
            ));
        }
        let route = super::matcher::normalize_path(&node.route);
        if !seen.insert((route, node.match_mode)) {
            return Err(NavError::invalid_menu(
                &node.label_key,
                format!(
                    "duplicates the route '{}' of an earlier sibling with the same match mode",
                    node.route
                ),
            ));
        }

        validate_level(&node.children)?;
    }

    debug!(siblings = nodes.len(), "validated menu level");
    Ok(())
}
