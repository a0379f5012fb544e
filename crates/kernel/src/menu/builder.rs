//! Navigation entry derivation.
//!
//! `(tree, grants, current path)` is projected into an ordered list of
//! [`NavigationEntry`] values:
//! 1. Depth-first walk in declared order.
//! 2. Nodes the actor may not see are skipped together with their subtree.
//! 3. At each level the most specific visible match is marked active.
//! 4. Each entry is bound to a navigation action for its route. `:param`
//!    segments are filled from the current path; a parametric node whose
//!    parameters the path cannot supply has no target and is not emitted.
//!
//! The derivation has no hidden state; identical inputs produce equal output.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use super::matcher::{active_index, fill_route, normalize_path};
use super::node::MenuNode;
use super::spec::MenuSpec;
use crate::cache::{CacheKey, NavigationCache};
use crate::capability::{CapabilitySet, is_visible};
use crate::labels::LabelResolver;
use crate::router::Navigator;

/// Which sub-entries are emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Expansion {
    /// Every visible node.
    #[default]
    All,
    /// Children only under the active entry, the way a sidebar opens the
    /// current section.
    ActiveSection,
}

impl FromStr for Expansion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Expansion::All),
            "active-section" | "active_section" => Ok(Expansion::ActiveSection),
            other => Err(format!(
                "unknown expansion '{other}', expected 'all' or 'active-section'"
            )),
        }
    }
}

/// One rendered navigation entry.
#[derive(Clone, Serialize)]
pub struct NavigationEntry {
    pub label_key: String,
    /// Resolved display text.
    pub label: String,
    /// Concrete target path, parameters filled.
    pub route: String,
    /// Most specific match among its visible siblings.
    pub active: bool,
    /// Active itself or has an active emitted descendant.
    pub contains_active: bool,
    /// 0 for top-level entries.
    pub depth: usize,
    #[serde(skip)]
    navigator: Arc<dyn Navigator>,
}

impl NavigationEntry {
    /// Request navigation to this entry's route.
    ///
    /// Repeating the call once the router is at the route does nothing.
    pub fn activate(&self) {
        self.navigator.navigate(&self.route);
    }

    fn rebind(&self, navigator: &Arc<dyn Navigator>) -> Self {
        Self {
            navigator: Arc::clone(navigator),
            ..self.clone()
        }
    }
}

impl PartialEq for NavigationEntry {
    fn eq(&self, other: &Self) -> bool {
        self.label_key == other.label_key
            && self.label == other.label
            && self.route == other.route
            && self.active == other.active
            && self.contains_active == other.contains_active
            && self.depth == other.depth
    }
}

impl Eq for NavigationEntry {}

impl fmt::Debug for NavigationEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationEntry")
            .field("label_key", &self.label_key)
            .field("label", &self.label)
            .field("route", &self.route)
            .field("active", &self.active)
            .field("contains_active", &self.contains_active)
            .field("depth", &self.depth)
            .finish_non_exhaustive()
    }
}

/// Derive the navigation entries for `spec`, emitting every visible node.
pub fn build(
    spec: &MenuSpec,
    grants: &CapabilitySet,
    current_path: &str,
    navigator: &Arc<dyn Navigator>,
    labels: &dyn LabelResolver,
) -> Vec<NavigationEntry> {
    let walk = Walk {
        grants,
        path: &normalize_path(current_path),
        expansion: Expansion::All,
        navigator,
        labels,
    };
    walk.run(&spec.roots)
}

struct Walk<'a> {
    grants: &'a CapabilitySet,
    path: &'a str,
    expansion: Expansion,
    navigator: &'a Arc<dyn Navigator>,
    labels: &'a dyn LabelResolver,
}

impl Walk<'_> {
    fn run(&self, roots: &[MenuNode]) -> Vec<NavigationEntry> {
        let mut out = Vec::new();
        self.level(roots, 0, &mut out);
        debug!(
            path = %self.path,
            grants = self.grants.len(),
            entries = out.len(),
            "derived navigation entries"
        );
        out
    }

    /// Emit one sibling group; returns whether anything in it is active.
    fn level(&self, nodes: &[MenuNode], depth: usize, out: &mut Vec<NavigationEntry>) -> bool {
        let visible: Vec<(&MenuNode, String)> = nodes
            .iter()
            .filter(|n| is_visible(n, self.grants))
            .filter_map(|n| fill_route(&n.route, self.path).map(|route| (n, route)))
            .collect();
        let winner = active_index(visible.iter().map(|(n, _)| *n), self.path);

        let mut any_active = false;
        for (idx, (node, route)) in visible.into_iter().enumerate() {
            let active = winner == Some(idx);
            let pos = out.len();
            out.push(NavigationEntry {
                label_key: node.label_key.clone(),
                label: self.labels.resolve(&node.label_key),
                route,
                active,
                contains_active: active,
                depth,
                navigator: Arc::clone(self.navigator),
            });

            let expand = match self.expansion {
                Expansion::All => true,
                Expansion::ActiveSection => active,
            };
            if expand && self.level(&node.children, depth + 1, out) {
                out[pos].contains_active = true;
            }
            any_active |= out[pos].contains_active;
        }
        any_active
    }
}

/// Derives navigation entries for one menu, router and label set.
pub struct NavigationBuilder {
    spec: Arc<MenuSpec>,
    fingerprint: u64,
    navigator: Arc<dyn Navigator>,
    labels: Arc<dyn LabelResolver>,
    expansion: Expansion,
    cache: Option<NavigationCache>,
}

impl NavigationBuilder {
    pub fn new(
        spec: impl Into<Arc<MenuSpec>>,
        navigator: Arc<dyn Navigator>,
        labels: Arc<dyn LabelResolver>,
    ) -> Self {
        let spec = spec.into();
        Self {
            fingerprint: spec.fingerprint(),
            spec,
            navigator,
            labels,
            expansion: Expansion::All,
            cache: None,
        }
    }

    pub fn with_expansion(mut self, expansion: Expansion) -> Self {
        self.expansion = expansion;
        self
    }

    /// Memoize derivations. The cache key covers every input, so a shared
    /// cache never returns entries for a different tree, grant set, path or
    /// label scope.
    pub fn with_cache(mut self, cache: NavigationCache) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Derive the entries for `grants` at `current_path`.
    pub fn build(&self, grants: &CapabilitySet, current_path: &str) -> Vec<NavigationEntry> {
        let path = normalize_path(current_path);

        let Some(cache) = &self.cache else {
            return self.derive(grants, &path);
        };

        let key = CacheKey {
            fingerprint: self.fingerprint,
            grants: grants.clone(),
            path: path.clone(),
            expansion: self.expansion,
            label_scope: self.labels.scope().to_string(),
        };
        let entries = cache.get_or_derive(key, || self.derive(grants, &path));
        entries.iter().map(|e| e.rebind(&self.navigator)).collect()
    }

    /// Derive the entries at the router's current location.
    pub fn build_current(&self, grants: &CapabilitySet) -> Vec<NavigationEntry> {
        self.build(grants, &self.navigator.current_path())
    }

    fn derive(&self, grants: &CapabilitySet, path: &str) -> Vec<NavigationEntry> {
        let walk = Walk {
            grants,
            path,
            expansion: self.expansion,
            navigator: &self.navigator,
            labels: self.labels.as_ref(),
        };
        walk.run(&self.spec.roots)
    }
}
