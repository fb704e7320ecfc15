//! Memoization of text statistics
//!
//! Entries are keyed on the text together with both boundary sets, so the
//! same text scanned under different boundary configurations never shares an
//! entry. The cache is a bounded LRU; it is never invalidated implicitly, only
//! evicted by capacity or emptied through [`StatsCache::clear`].

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};

use lru::LruCache;
use parking_lot::Mutex;

use crate::boundary::BoundarySet;
use crate::stats::TextStatistics;

/// Number of entries kept by default
pub const DEFAULT_CACHE_CAPACITY: usize = 4096;

/// Identity of one statistics computation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    text_hash: u64,
    text_len: usize,
    word_boundaries: BoundarySet,
    sentence_boundaries: BoundarySet,
}

impl CacheKey {
    /// Build the key for `text` scanned with the given boundary sets
    pub fn new(text: &str, word_boundaries: &BoundarySet, sentence_boundaries: &BoundarySet) -> Self {
        let mut hasher = DefaultHasher::new();
        text.hash(&mut hasher);

        Self {
            text_hash: hasher.finish(),
            text_len: text.len(),
            word_boundaries: word_boundaries.clone(),
            sentence_boundaries: sentence_boundaries.clone(),
        }
    }
}

/// Hit/miss counters of a cache
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheMetrics {
    /// Lookups answered from the cache
    pub hits: u64,
    /// Lookups that required a scan
    pub misses: u64,
    /// Entries currently stored
    pub entries: usize,
}

/// Thread-safe bounded LRU cache of [`TextStatistics`]
///
/// The lock is only held for lookups and inserts. Two threads missing on the
/// same key both compute, and the later insert wins.
pub struct StatsCache {
    entries: Option<Mutex<LruCache<CacheKey, TextStatistics>>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl StatsCache {
    /// Create a cache holding at most `capacity` entries; 0 disables caching
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: NonZeroUsize::new(capacity).map(|cap| Mutex::new(LruCache::new(cap))),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Look up `key`
    pub fn get(&self, key: &CacheKey) -> Option<TextStatistics> {
        let found = self
            .entries
            .as_ref()
            .and_then(|entries| entries.lock().get(key).copied());

        if found.is_some() {
            self.hits.fetch_add(1, Ordering::Relaxed);
            log::trace!("statistics cache hit ({} bytes)", key.text_len);
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
            log::trace!("statistics cache miss ({} bytes)", key.text_len);
        }
        found
    }

    /// Store `stats` under `key`, replacing any previous entry
    pub fn insert(&self, key: CacheKey, stats: TextStatistics) {
        if let Some(entries) = &self.entries {
            entries.lock().put(key, stats);
        }
    }

    /// Return the cached value for `key` or compute and store it
    pub fn get_or_compute<F>(&self, key: CacheKey, compute: F) -> TextStatistics
    where
        F: FnOnce() -> TextStatistics,
    {
        if let Some(stats) = self.get(&key) {
            return stats;
        }

        let stats = compute();
        self.insert(key, stats);
        stats
    }

    /// Remove every entry and reset the counters
    pub fn clear(&self) {
        if let Some(entries) = &self.entries {
            let mut entries = entries.lock();
            log::debug!("clearing statistics cache ({} entries)", entries.len());
            entries.clear();
        }
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.entries
            .as_ref()
            .map_or(0, |entries| entries.lock().len())
    }

    /// Whether the cache holds no entries
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of entries
    pub fn capacity(&self) -> usize {
        self.entries
            .as_ref()
            .map_or(0, |entries| entries.lock().cap().get())
    }

    /// Snapshot of the hit/miss counters
    pub fn metrics(&self) -> CacheMetrics {
        CacheMetrics {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.len(),
        }
    }
}

impl Default for StatsCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

impl std::fmt::Debug for StatsCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatsCache")
            .field("capacity", &self.capacity())
            .field("metrics", &self.metrics())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(text: &str) -> CacheKey {
        CacheKey::new(text, &BoundarySet::word(), &BoundarySet::sentence())
    }

    fn sample(words: usize) -> TextStatistics {
        TextStatistics {
            letters: words * 3,
            words,
            sentences: 1,
            syllables: words,
        }
    }

    #[test]
    fn test_same_text_same_key() {
        assert_eq!(key("Hallo Welt."), key("Hallo Welt."));
        assert_ne!(key("Hallo Welt."), key("Hallo Welt!"));
    }

    #[test]
    fn test_boundaries_are_part_of_the_key() {
        let text = "eins;zwei";
        let default = key(text);
        let custom = CacheKey::new(text, &BoundarySet::from(";"), &BoundarySet::sentence());
        let swapped = CacheKey::new(text, &BoundarySet::sentence(), &BoundarySet::word());
        assert_ne!(default, custom);
        assert_ne!(default, swapped);
    }

    #[test]
    fn test_get_or_compute_memoizes() {
        let cache = StatsCache::new(8);
        let mut calls = 0;
        let first = cache.get_or_compute(key("a"), || {
            calls += 1;
            sample(1)
        });
        let second = cache.get_or_compute(key("a"), || {
            calls += 1;
            sample(99)
        });
        assert_eq!(first, second);
        assert_eq!(calls, 1);
        assert_eq!(cache.metrics().hits, 1);
        assert_eq!(cache.metrics().misses, 1);
    }

    #[test]
    fn test_lru_eviction_respects_capacity() {
        let cache = StatsCache::new(2);
        cache.insert(key("a"), sample(1));
        cache.insert(key("b"), sample(2));
        // Touch "a" so "b" becomes least recently used
        assert!(cache.get(&key("a")).is_some());
        cache.insert(key("c"), sample(3));

        assert_eq!(cache.len(), 2);
        assert!(cache.get(&key("a")).is_some());
        assert!(cache.get(&key("b")).is_none());
        assert!(cache.get(&key("c")).is_some());
    }

    #[test]
    fn test_clear() {
        let cache = StatsCache::new(4);
        cache.insert(key("a"), sample(1));
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.metrics(), CacheMetrics::default());
        assert_eq!(cache.capacity(), 4);
    }

    #[test]
    fn test_zero_capacity_disables_caching() {
        let cache = StatsCache::new(0);
        cache.insert(key("a"), sample(1));
        assert!(cache.get(&key("a")).is_none());
        assert_eq!(cache.capacity(), 0);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_concurrent_inserts() {
        let cache = std::sync::Arc::new(StatsCache::new(1024));
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let cache = cache.clone();
                std::thread::spawn(move || {
                    for i in 0..50 {
                        let text = format!("thread {t} text {i}");
                        cache.get_or_compute(key(&text), || sample(i));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(cache.len(), 400);
        assert_eq!(cache.get(&key("thread 3 text 7")), Some(sample(7)));
    }
}
