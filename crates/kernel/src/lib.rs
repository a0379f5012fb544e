//! Carenav Kernel Library
//!
//! Permission-aware primary navigation for the clinical modules (patients,
//! scheduling, labs, incidents). Given a static menu tree, the actor's
//! capability grants and the current path, it derives the ordered list of
//! entries to display, which one is active, and an action bound to each.
//!
//! The `carenav` binary renders that list from the command line.

pub mod cache;
pub mod capability;
pub mod cli;
pub mod config;
pub mod error;
pub mod labels;
pub mod menu;
pub mod router;

pub use cache::NavigationCache;
pub use capability::{Capability, CapabilitySet, is_visible};
pub use config::Config;
pub use error::{NavError, NavResult};
pub use labels::{KeyLabels, LabelResolver, TranslationTable};
pub use menu::{Expansion, MenuNode, MenuSpec, NavigationBuilder, NavigationEntry};
pub use router::{MemoryHistory, Navigator};
