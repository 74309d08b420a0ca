use std::{collections::VecDeque, sync::Arc};

use crate::geom::flatten::FlattenedPath;

/// Flattened shapes kept between calls.
pub const DEFAULT_CACHE_CAPACITY: usize = 8;

/// Small LRU of flattened geometry keyed by shape fingerprint.
///
/// Interactive editing re-rasterizes the same shape on every pointer move; the key changes
/// only when the anchors (or stroke profile) change, so the polygon is rebuilt once per
/// visible mutation.
#[derive(Debug)]
pub struct FlattenCache {
    capacity: usize,
    entries: VecDeque<(u64, Arc<FlattenedPath>)>,
    hits: u64,
    misses: u64,
}

impl Default for FlattenCache {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }
}

impl FlattenCache {
    /// Cache holding at most `capacity` shapes (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            entries: VecDeque::with_capacity(capacity),
            hits: 0,
            misses: 0,
        }
    }

    /// Return the cached entry for `key`, or build, insert and return it.
    pub fn get_or_insert_with(
        &mut self,
        key: u64,
        build: impl FnOnce() -> FlattenedPath,
    ) -> Arc<FlattenedPath> {
        if let Some(idx) = self.entries.iter().position(|(k, _)| *k == key) {
            self.hits += 1;
            tracing::debug!(key, "flatten cache hit");
            if let Some(entry) = self.entries.remove(idx) {
                let path = Arc::clone(&entry.1);
                self.entries.push_front(entry);
                return path;
            }
        }

        self.misses += 1;
        tracing::debug!(key, "flatten cache miss");
        let path = Arc::new(build());
        if self.entries.len() >= self.capacity {
            self.entries.pop_back();
        }
        self.entries.push_front((key, Arc::clone(&path)));
        path
    }

    /// Drop everything.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of cached shapes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(hits, misses)` since construction.
    pub fn stats(&self) -> (u64, u64) {
        (self.hits, self.misses)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/cache.rs"]
mod tests;
