//! Derivation cache.
//!
//! Memoizes derived navigation lists by every input that affects them. Nothing
//! is stored that cannot be recomputed from the key, so a changed tree, grant
//! set, path or label scope simply misses.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use moka::sync::Cache;
use tracing::debug;

use crate::capability::CapabilitySet;
use crate::menu::{Expansion, NavigationEntry};

/// Default maximum number of cached derivations.
pub const DEFAULT_CAPACITY: u64 = 1024;

/// Everything a derivation depends on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    /// [`MenuSpec::fingerprint`](crate::menu::MenuSpec::fingerprint).
    pub fingerprint: u64,
    pub grants: CapabilitySet,
    /// Normalized current path.
    pub path: String,
    pub expansion: Expansion,
    /// [`LabelResolver::scope`](crate::labels::LabelResolver::scope).
    pub label_scope: String,
}

/// Cache statistics for monitoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub entry_count: u64,
    pub hits: u64,
    pub misses: u64,
}

/// Bounded, shareable derivation cache.
#[derive(Clone)]
pub struct NavigationCache {
    inner: Arc<NavigationCacheInner>,
}

struct NavigationCacheInner {
    entries: Cache<CacheKey, Arc<Vec<NavigationEntry>>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl NavigationCache {
    pub fn new(max_capacity: u64) -> Self {
        Self {
            inner: Arc::new(NavigationCacheInner {
                entries: Cache::builder().max_capacity(max_capacity).build(),
                hits: AtomicU64::new(0),
                misses: AtomicU64::new(0),
            }),
        }
    }

    /// Return the cached derivation for `key`, computing it on a miss.
    pub fn get_or_derive(
        &self,
        key: CacheKey,
        derive: impl FnOnce() -> Vec<NavigationEntry>,
    ) -> Arc<Vec<NavigationEntry>> {
        if let Some(entries) = self.inner.entries.get(&key) {
            self.inner.hits.fetch_add(1, Ordering::Relaxed);
            debug!(path = %key.path, "navigation cache hit");
            return entries;
        }

        self.inner.misses.fetch_add(1, Ordering::Relaxed);
        let entries = Arc::new(derive());
        self.inner.entries.insert(key, Arc::clone(&entries));
        entries
    }

    /// Drop every cached derivation.
    pub fn invalidate_all(&self) {
        self.inner.entries.invalidate_all();
        self.inner.entries.run_pending_tasks();
    }

    pub fn stats(&self) -> CacheStats {
        self.inner.entries.run_pending_tasks();
        CacheStats {
            entry_count: self.inner.entries.entry_count(),
            hits: self.inner.hits.load(Ordering::Relaxed),
            misses: self.inner.misses.load(Ordering::Relaxed),
        }
    }
}

impl Default for NavigationCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
