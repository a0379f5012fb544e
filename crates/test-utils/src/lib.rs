//! Carenav test utilities.
//!
//! Helpers for integration testing: grant fixtures and a harness that mounts
//! the navigation model on an in-memory router, the way the sidebar is
//! mounted in the application.

use std::sync::Arc;

use carenav_kernel::{
    Capability, CapabilitySet, Expansion, KeyLabels, MemoryHistory, MenuSpec, NavigationBuilder,
    NavigationEntry, Navigator,
};

/// Every capability the application defines.
pub fn all_grants() -> CapabilitySet {
    CapabilitySet::all()
}

/// The "logged in, nothing granted" state.
pub fn no_grants() -> CapabilitySet {
    CapabilitySet::empty()
}

/// Capabilities that gate an entry of the built-in menu.
pub const MENU_CAPABILITIES: [Capability; 8] = [
    Capability::WritePatients,
    Capability::ReadPatients,
    Capability::WriteAppointments,
    Capability::ReadAppointments,
    Capability::RequestLab,
    Capability::ViewLabs,
    Capability::ReportIncident,
    Capability::ViewIncidents,
];

/// Every subset of [`MENU_CAPABILITIES`].
pub fn menu_grant_subsets() -> Vec<CapabilitySet> {
    (0u32..(1 << MENU_CAPABILITIES.len()))
        .map(|mask| {
            MENU_CAPABILITIES
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, c)| *c)
                .collect()
        })
        .collect()
}

/// A navigation model mounted on a memory router at a location.
pub struct NavHarness {
    history: Arc<MemoryHistory>,
    builder: NavigationBuilder,
    grants: CapabilitySet,
}

impl NavHarness {
    /// Mount the built-in menu at `location` with every grant.
    pub fn at(location: &str) -> Self {
        Self::with_spec(MenuSpec::hospital(), location)
    }

    /// Mount `spec` at `location` with every grant.
    pub fn with_spec(spec: MenuSpec, location: &str) -> Self {
        let history = Arc::new(MemoryHistory::new(location));
        let navigator: Arc<dyn Navigator> = history.clone();
        Self {
            builder: NavigationBuilder::new(spec, navigator, Arc::new(KeyLabels)),
            history,
            grants: all_grants(),
        }
    }

    /// Replace the actor's grants.
    pub fn grants(mut self, grants: CapabilitySet) -> Self {
        self.grants = grants;
        self
    }

    /// Replace the expansion mode.
    pub fn expansion(mut self, expansion: Expansion) -> Self {
        self.builder = self.builder.with_expansion(expansion);
        self
    }

    /// Entries at the router's current location.
    pub fn entries(&self) -> Vec<NavigationEntry> {
        self.builder.build_current(&self.grants)
    }

    /// Rendered labels, in order.
    pub fn labels(&self) -> Vec<String> {
        self.entries().into_iter().map(|e| e.label).collect()
    }

    /// Label keys of the active entries, in order.
    pub fn active_keys(&self) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter(|e| e.active)
            .map(|e| e.label_key)
            .collect()
    }

    /// The entry with `label_key`, if rendered.
    pub fn entry(&self, label_key: &str) -> Option<NavigationEntry> {
        self.entries().into_iter().find(|e| e.label_key == label_key)
    }

    /// The entry at `index`, if rendered.
    pub fn entry_at(&self, index: usize) -> Option<NavigationEntry> {
        self.entries().into_iter().nth(index)
    }

    /// Activate the entry with `label_key`. Returns false if it is not rendered.
    pub fn click(&self, label_key: &str) -> bool {
        match self.entry(label_key) {
            Some(entry) => {
                entry.activate();
                true
            }
            None => false,
        }
    }

    /// The router's current location.
    pub fn location(&self) -> String {
        self.history.current_path()
    }

    /// The underlying history.
    pub fn history(&self) -> &MemoryHistory {
        &self.history
    }
}
