//! Declarative menu nodes.

use serde::{Deserialize, Serialize};

use crate::capability::Capability;

/// How a node's route is compared against the current path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// The path must equal the route (segment for segment).
    Exact,
    /// The route must be a path-segment prefix of the path.
    #[default]
    Prefix,
}

/// A static menu entry and its sub-entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MenuNode {
    /// Opaque label identifier, resolved by a [`LabelResolver`](crate::labels::LabelResolver).
    pub label_key: String,
    /// Canonical path the entry navigates to. May contain `:param` segments.
    pub route: String,
    /// Capability required to see this node (and its subtree).
    pub required_capability: Option<Capability>,
    pub match_mode: MatchMode,
    /// Ordered sub-entries.
    pub children: Vec<MenuNode>,
}

impl MenuNode {
    /// Create an ungated, prefix-matched node with no children.
    pub fn new(label_key: impl Into<String>, route: impl Into<String>) -> Self {
        Self {
            label_key: label_key.into(),
            route: route.into(),
            required_capability: None,
            match_mode: MatchMode::Prefix,
            children: Vec::new(),
        }
    }

    /// Require `capability` to see this node.
    pub fn requires(mut self, capability: Capability) -> Self {
        self.required_capability = Some(capability);
        self
    }

    /// Only activate on an exact path match.
    pub fn exact(mut self) -> Self {
        self.match_mode = MatchMode::Exact;
        self
    }

    /// Append a sub-entry.
    pub fn child(mut self, node: MenuNode) -> Self {
        self.children.push(node);
        self
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(MenuNode::node_count).sum::<usize>()
    }
}
