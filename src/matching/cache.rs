//! Bounded memoization of similarity ratios.
//!
//! The diff engine owns one [`SimilarityCache`] and consults it for every
//! candidate pair it scores. Entries are evicted least-recently-used first
//! once the configured capacity is reached.

use super::similarity;
use crate::model::RowKey;
use std::collections::{BTreeMap, HashMap};

/// Default number of cached key pairs.
pub const DEFAULT_CACHE_CAPACITY: usize = 4096;

type PairKey = (RowKey, RowKey);

/// Statistics for cache performance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Total cache lookups
    pub lookups: u64,
    /// Cache hits
    pub hits: u64,
    /// Cache misses
    pub misses: u64,
    /// Entries evicted
    pub evictions: u64,
}

impl CacheStats {
    /// Get the cache hit rate.
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        if self.lookups == 0 {
            0.0
        } else {
            self.hits as f64 / self.lookups as f64
        }
    }
}

/// LRU cache of similarity ratios keyed by the (ordered) key pair.
///
/// A capacity of zero disables caching; every lookup then computes.
#[derive(Debug)]
pub struct SimilarityCache {
    capacity: usize,
    entries: HashMap<PairKey, (f64, u64)>,
    recency: BTreeMap<u64, PairKey>,
    tick: u64,
    stats: CacheStats,
}

impl Default for SimilarityCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

impl SimilarityCache {
    /// Create a cache holding at most `capacity` pairs.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: HashMap::new(),
            recency: BTreeMap::new(),
            tick: 0,
            stats: CacheStats::default(),
        }
    }

    /// Similarity of `a` and `b`, computed on a miss.
    pub fn similarity(&mut self, a: &RowKey, b: &RowKey) -> f64 {
        self.stats.lookups += 1;
        if self.capacity == 0 {
            self.stats.misses += 1;
            return similarity(a, b);
        }

        // the ratio is symmetric, so one entry serves both orders
        let pair = if a <= b {
            (a.clone(), b.clone())
        } else {
            (b.clone(), a.clone())
        };

        self.tick += 1;
        let tick = self.tick;
        if let Some((ratio, last_used)) = self.entries.get_mut(&pair) {
            let ratio = *ratio;
            self.recency.remove(last_used);
            *last_used = tick;
            self.recency.insert(tick, pair);
            self.stats.hits += 1;
            return ratio;
        }

        self.stats.misses += 1;
        let ratio = similarity(&pair.0, &pair.1);
        if self.entries.len() >= self.capacity {
            self.evict_oldest();
        }
        self.recency.insert(tick, pair.clone());
        self.entries.insert(pair, (ratio, tick));
        ratio
    }

    fn evict_oldest(&mut self) {
        if let Some((_, pair)) = self.recency.pop_first() {
            self.entries.remove(&pair);
            self.stats.evictions += 1;
        }
    }

    /// Number of cached pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of cached pairs.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Get cache statistics.
    #[must_use]
    pub const fn stats(&self) -> CacheStats {
        self.stats
    }

    /// Drop every entry and reset statistics.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.recency.clear();
        self.stats = CacheStats::default();
    }
}
