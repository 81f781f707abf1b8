//! Layout caching for memoization.

use crate::layout_data::LayoutData;
use flowgrid_core::Size;
use std::collections::HashMap;

/// Exact constraint box, compared bit for bit.
///
/// `-0.0` is folded into `0.0` so both spellings of zero share an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey {
    width_bits: u32,
    height_bits: u32,
}

impl CacheKey {
    /// Key for a constraint box.
    #[must_use]
    pub fn new(available: Size) -> Self {
        Self {
            width_bits: (available.width + 0.0).to_bits(),
            height_bits: (available.height + 0.0).to_bits(),
        }
    }
}

impl From<Size> for CacheKey {
    fn from(available: Size) -> Self {
        Self::new(available)
    }
}

/// Layout cache mapping constraint boxes to computed layouts.
///
/// Entries stay valid until [`LayoutCache::clear`]; there is no partial
/// invalidation.
#[derive(Debug, Default)]
pub struct LayoutCache {
    entries: HashMap<CacheKey, LayoutData>,
    hits: usize,
    misses: usize,
}

impl LayoutCache {
    /// Create a new empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a cached layout.
    #[must_use]
    pub fn get(&mut self, key: CacheKey) -> Option<LayoutData> {
        if let Some(data) = self.entries.get(&key) {
            self.hits += 1;
            Some(*data)
        } else {
            self.misses += 1;
            None
        }
    }

    /// Insert a computed layout into the cache.
    pub fn insert(&mut self, key: CacheKey, data: LayoutData) {
        self.entries.insert(key, data);
    }

    /// Clear the entire cache.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }

    /// Get the number of cache hits.
    #[must_use]
    pub const fn hits(&self) -> usize {
        self.hits
    }

    /// Get the number of cache misses.
    #[must_use]
    pub const fn misses(&self) -> usize {
        self.misses
    }

    /// Get the number of cached entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
