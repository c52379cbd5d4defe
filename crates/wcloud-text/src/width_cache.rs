#![forbid(unsafe_code)]

//! LRU width cache for text measurement.
//!
//! A render measures every displayed word, and successive renders mostly
//! redisplay the same words, so widths are cached by a 64-bit hash of the
//! text rather than recomputed.
//!
//! # Example
//! ```
//! use wcloud_text::WidthCache;
//!
//! let mut cache = WidthCache::new(64);
//! assert_eq!(cache.get_or_compute("cloud"), 5);
//! assert_eq!(cache.get_or_compute("cloud"), 5);
//!
//! let stats = cache.stats();
//! assert_eq!(stats.hits, 1);
//! assert_eq!(stats.misses, 1);
//! ```

use lru::LruCache;
use rustc_hash::FxHasher;
use std::hash::{Hash, Hasher};
use std::num::NonZeroUsize;

/// Default cache capacity.
pub const DEFAULT_CACHE_CAPACITY: usize = 1024;

/// Statistics about cache performance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    /// Current number of entries.
    pub size: usize,
    pub capacity: usize,
}

impl CacheStats {
    /// Hit rate in [0.0, 1.0]; 0.0 before any lookup.
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// LRU cache of text display widths.
///
/// Keys are 64-bit FxHash values of the text, not the text itself.
/// Not thread-safe; the layout engine runs on a single thread.
#[derive(Debug)]
pub struct WidthCache {
    cache: LruCache<u64, usize>,
    hits: u64,
    misses: u64,
}

impl WidthCache {
    /// Create a cache holding up to `capacity` widths (minimum 1).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: LruCache::new(capacity),
            hits: 0,
            misses: 0,
        }
    }

    #[must_use]
    pub fn with_default_capacity() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }

    /// Cached display width of `text`, computing it on a miss.
    #[inline]
    pub fn get_or_compute(&mut self, text: &str) -> usize {
        self.get_or_compute_with(text, crate::display_width)
    }

    /// Cached width of `text`, computing it with `compute` on a miss.
    pub fn get_or_compute_with<F>(&mut self, text: &str, compute: F) -> usize
    where
        F: FnOnce(&str) -> usize,
    {
        let hash = hash_text(text);
        if let Some(&width) = self.cache.get(&hash) {
            self.hits += 1;
            return width;
        }
        self.misses += 1;
        let width = compute(text);
        self.cache.put(hash, width);
        width
    }

    /// Whether a width for `text` is cached.
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.cache.contains(&hash_text(text))
    }

    /// Drop all entries and reset statistics.
    pub fn clear(&mut self) {
        self.cache.clear();
        self.hits = 0;
        self.misses = 0;
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            size: self.cache.len(),
            capacity: self.cache.cap().get(),
        }
    }
}

impl Default for WidthCache {
    fn default() -> Self {
        Self::with_default_capacity()
    }
}

#[inline]
fn hash_text(text: &str) -> u64 {
    let mut hasher = FxHasher::default();
    text.hash(&mut hasher);
    hasher.finish()
}
