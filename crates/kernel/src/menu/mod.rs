//! Menu system for navigation derivation.
//!
//! The menu is a static, ordered tree of [`MenuNode`]s. Per request it is
//! projected through the actor's grants and the current path into a flat list
//! of [`NavigationEntry`] values:
//! - [`capability::is_visible`](crate::capability::is_visible) gates nodes
//! - [`matcher`] picks the active entry at each level
//! - [`builder`] walks the tree and binds navigation actions

pub mod builder;
pub mod matcher;
mod node;
mod spec;

pub use builder::{Expansion, NavigationBuilder, NavigationEntry, build};
pub use matcher::{Specificity, active_index, fill_route, is_active, match_route, normalize_path};
pub use node::{MatchMode, MenuNode};
pub use spec::{MenuDefinition, MenuSpec};
