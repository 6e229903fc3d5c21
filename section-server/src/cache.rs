//! Result cache for section lookups.
//!
//! Scanning a station file is the expensive part of a lookup, and the files
//! are static reference data, so results are memoised per query. By default
//! the cache is unbounded and entries live for the whole process: a data
//! file replaced on disk keeps serving its old results until the process
//! restarts or [`SectionCache::invalidate_all`] is called. A TTL or capacity
//! bound can be configured where that staleness is not acceptable.

use std::time::Duration;

use moka::sync::Cache as MokaCache;

use crate::domain::{Query, SectionList};

/// Configuration for the cache.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheConfig {
    /// TTL for cached entries. `None` keeps entries forever.
    pub ttl: Option<Duration>,

    /// Maximum number of cached entries. `None` means unbounded.
    pub max_capacity: Option<u64>,
}

impl CacheConfig {
    /// Set a TTL.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = Some(ttl);
        self
    }

    /// Set a capacity bound.
    pub fn with_max_capacity(mut self, max_capacity: u64) -> Self {
        self.max_capacity = Some(max_capacity);
        self
    }
}

/// Thread-safe memo of lookup results, keyed by query.
///
/// Concurrent misses for the same query may both compute and insert; the
/// results are equal, so the last write wins.
#[derive(Clone)]
pub struct SectionCache {
    entries: MokaCache<Query, SectionList>,
}

impl SectionCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let mut builder = MokaCache::builder();
        if let Some(ttl) = config.ttl {
            builder = builder.time_to_live(ttl);
        }
        if let Some(max_capacity) = config.max_capacity {
            builder = builder.max_capacity(max_capacity);
        }

        Self {
            entries: builder.build(),
        }
    }

    /// Get a cached result.
    pub fn get(&self, query: &Query) -> Option<SectionList> {
        self.entries.get(query)
    }

    /// Insert a result, replacing any previous entry for the query.
    pub fn insert(&self, query: Query, sections: SectionList) {
        self.entries.insert(query, sections);
    }

    /// Number of cached entries.
    ///
    /// Approximate while inserts are still being applied in the background.
    pub fn entry_count(&self) -> u64 {
        self.entries.run_pending_tasks();
        self.entries.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.entries.invalidate_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn query(wagon: i64) -> Query {
        Query::parse("ABC", 456, wagon).unwrap()
    }

    fn sections(ids: &[&str]) -> SectionList {
        ids.iter().map(|s| s.to_string()).collect::<Vec<_>>().into()
    }

    #[test]
    fn default_config_is_unbounded() {
        let config = CacheConfig::default();
        assert_eq!(config.ttl, None);
        assert_eq!(config.max_capacity, None);
    }

    #[test]
    fn config_builders() {
        let config = CacheConfig::default()
            .with_ttl(Duration::from_secs(300))
            .with_max_capacity(10_000);
        assert_eq!(config.ttl, Some(Duration::from_secs(300)));
        assert_eq!(config.max_capacity, Some(10_000));
    }

    #[test]
    fn cache_creation() {
        let cache = SectionCache::new(&CacheConfig::default());
        assert_eq!(cache.entry_count(), 0);
        assert!(cache.get(&query(7)).is_none());
    }

    #[test]
    fn insert_and_get() {
        let cache = SectionCache::new(&CacheConfig::default());
        let stored = sections(&["X1", "X2"]);
        cache.insert(query(7), stored.clone());

        let hit = cache.get(&query(7)).unwrap();
        assert!(Arc::ptr_eq(&hit, &stored));
        assert!(cache.get(&query(8)).is_none());
        assert_eq!(cache.entry_count(), 1);
    }

    #[test]
    fn empty_results_are_cached() {
        let cache = SectionCache::new(&CacheConfig::default());
        cache.insert(query(8), sections(&[]));

        let hit = cache.get(&query(8)).unwrap();
        assert!(hit.is_empty());
    }

    #[test]
    fn last_write_wins() {
        let cache = SectionCache::new(&CacheConfig::default());
        cache.insert(query(7), sections(&["OLD"]));
        cache.insert(query(7), sections(&["NEW"]));

        assert_eq!(&*cache.get(&query(7)).unwrap(), &["NEW".to_string()]);
        assert_eq!(cache.entry_count(), 1);
    }

    #[test]
    fn invalidate_all_clears() {
        let cache = SectionCache::new(&CacheConfig::default());
        cache.insert(query(7), sections(&["X1"]));
        cache.invalidate_all();

        assert!(cache.get(&query(7)).is_none());
    }

    #[test]
    fn ttl_expires_entries() {
        let config = CacheConfig::default().with_ttl(Duration::from_millis(50));
        let cache = SectionCache::new(&config);
        cache.insert(query(7), sections(&["X1"]));
        assert!(cache.get(&query(7)).is_some());

        std::thread::sleep(Duration::from_millis(120));
        assert!(cache.get(&query(7)).is_none());
    }
}
