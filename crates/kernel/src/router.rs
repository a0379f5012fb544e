//! Routing collaborator.
//!
//! The navigation model never owns the router; it only reads the current path
//! and fires navigation requests through [`Navigator`].

use parking_lot::Mutex;
use tracing::debug;

use crate::menu::normalize_path;

/// The router as seen by navigation entries.
pub trait Navigator: Send + Sync {
    /// The current, normalized location.
    fn current_path(&self) -> String;

    /// Request navigation to `route`. Fire-and-forget.
    fn navigate(&self, route: &str);
}

/// In-memory history stack.
///
/// Used by the CLI and tests in place of a browser router. The last entry is
/// the current location.
#[derive(Debug)]
pub struct MemoryHistory {
    entries: Mutex<Vec<String>>,
}

impl MemoryHistory {
    /// Create a history positioned at `initial`.
    pub fn new(initial: &str) -> Self {
        Self {
            entries: Mutex::new(vec![normalize_path(initial)]),
        }
    }

    /// Push a location unconditionally.
    pub fn push(&self, path: &str) {
        self.entries.lock().push(normalize_path(path));
    }

    /// Step back one location. The initial location is never popped.
    pub fn back(&self) -> Option<String> {
        let mut entries = self.entries.lock();
        if entries.len() > 1 {
            entries.pop()
        } else {
            None
        }
    }

    /// Every visited location, oldest first.
    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().clone()
    }

    /// Number of locations on the stack (always at least one).
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

impl Navigator for MemoryHistory {
    fn current_path(&self) -> String {
        self.entries.lock().last().cloned().unwrap_or_else(|| "/".to_string())
    }

    /// Navigating to the current location is a no-op.
    fn navigate(&self, route: &str) {
        let target = normalize_path(route);
        let mut entries = self.entries.lock();
        if entries.last() == Some(&target) {
            debug!(route = %target, "already at route, navigation skipped");
            return;
        }
        debug!(route = %target, "navigating");
        entries.push(target);
    }
}
