//! SharedCache: thread-safe LRU cache with statistics

use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::config::CacheConfig;
use crate::error::Result;
use crate::lru::LruCache;
use crate::stats::{CacheStats, Event};

/// LRU cache behind a single lock, shareable across threads
///
/// `get` reorders the recency list, so every operation takes the same
/// exclusive lock. Clones share the underlying cache and statistics.
pub struct SharedCache<K, V> {
    /// LRU cache guarded by one mutex
    cache: Arc<Mutex<LruCache<K, V>>>,

    /// Cache statistics
    stats: Arc<CacheStats>,
}

impl<K, V> SharedCache<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    /// Create a new SharedCache with the given capacity
    ///
    /// # Arguments
    /// * `capacity` - Maximum number of items in cache
    ///
    /// # Returns
    /// * `Result<SharedCache>` - Fails if `capacity` is 0
    pub fn new(capacity: usize) -> Result<Self> {
        Self::with_config(&CacheConfig::new(capacity))
    }

    /// Create a new SharedCache from a config
    pub fn with_config(config: &CacheConfig) -> Result<Self> {
        let cache = LruCache::with_config(config)?;

        Ok(Self {
            cache: Arc::new(Mutex::new(cache)),
            stats: Arc::new(CacheStats::new()),
        })
    }

    /// Get a copy of a cached value, marking it most recently used
    ///
    /// # Arguments
    /// * `key` - Key to look up
    ///
    /// # Returns
    /// * `Option<V>` - `None` on a miss
    pub fn get(&self, key: &K) -> Option<V> {
        let mut cache = self.cache.lock();
        match cache.get(key) {
            Some(value) => {
                self.stats.record(Event::Hit);
                Some(value.clone())
            }
            None => {
                self.stats.record(Event::Miss);
                None
            }
        }
    }

    /// Insert or overwrite a value
    ///
    /// # Arguments
    /// * `key` - Key to store under
    /// * `value` - Value to cache
    pub fn put(&self, key: K, value: V) {
        let mut cache = self.cache.lock();
        if cache.contains(&key) {
            self.stats.record(Event::Update);
        } else {
            self.stats.record(Event::Insert);
        }

        if cache.push(key, value).is_some() {
            self.stats.record(Event::Eviction);
        }
    }

    /// Remove a value from the cache
    pub fn remove(&self, key: &K) -> Option<V> {
        self.cache.lock().remove(key)
    }

    /// Check whether a key is cached without changing its recency
    pub fn contains(&self, key: &K) -> bool {
        self.cache.lock().contains(key)
    }

    /// Get cache statistics
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Get current cache size
    pub fn len(&self) -> usize {
        self.cache.lock().len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.cache.lock().is_empty()
    }

    /// Get cache capacity
    pub fn capacity(&self) -> usize {
        self.cache.lock().capacity()
    }

    /// Clear the cache and reset statistics
    pub fn clear(&self) {
        let mut cache = self.cache.lock();
        cache.clear();
        self.stats.reset();
    }
}

impl<K, V> Clone for SharedCache<K, V> {
    fn clone(&self) -> Self {
        Self {
            cache: Arc::clone(&self.cache),
            stats: Arc::clone(&self.stats),
        }
    }
}

impl<K, V> fmt::Debug for SharedCache<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedCache")
            .field("capacity", &self.capacity())
            .field("stats", &self.stats.snapshot())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CapacityPolicy;
    use crate::error::Error;
    use std::thread;

    #[test]
    fn test_cache_basic() {
        let cache = SharedCache::new(10).unwrap();

        cache.put(1, b"test data".to_vec());
        let data = cache.get(&1).unwrap();

        assert_eq!(data, b"test data");
        assert_eq!(cache.stats().snapshot().hits, 1);
        assert_eq!(cache.stats().snapshot().misses, 0);
        assert_eq!(cache.stats().snapshot().inserts, 1);
    }

    #[test]
    fn test_cache_zero_capacity() {
        let result = SharedCache::<u64, u64>::new(0);
        assert!(matches!(result, Err(Error::InvalidCapacity(0))));

        let config = CacheConfig::new(0).with_policy(CapacityPolicy::Clamp);
        let cache = SharedCache::<u64, u64>::with_config(&config).unwrap();
        assert_eq!(cache.capacity(), 1);
    }

    #[test]
    fn test_cache_huge_capacity_from_config() {
        let json = format!(r#"{{"capacity": {}}}"#, usize::MAX);
        let config = CacheConfig::from_json(&json).unwrap();
        let cache = SharedCache::with_config(&config).unwrap();

        cache.put(1u64, "a");
        cache.put(2u64, "b");

        assert_eq!(cache.capacity(), usize::MAX);
        assert_eq!(cache.get(&1), Some("a"));
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.stats().snapshot().evictions, 0);
    }

    #[test]
    fn test_cache_miss() {
        let cache = SharedCache::<u64, String>::new(2).unwrap();

        assert_eq!(cache.get(&7), None);
        assert_eq!(cache.stats().snapshot().misses, 1);
        assert_eq!(cache.stats().hit_ratio(), 0.0);
    }

    #[test]
    fn test_cache_eviction() {
        let cache = SharedCache::new(2).unwrap();

        cache.put(1, 1);
        cache.put(2, 2);
        assert_eq!(cache.get(&1), Some(1));
        cache.put(3, 3); // Should evict 2

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.stats().snapshot().evictions, 1);
        assert_eq!(cache.get(&2), None);
        assert_eq!(cache.get(&1), Some(1));
        assert_eq!(cache.get(&3), Some(3));
    }

    #[test]
    fn test_cache_update() {
        let cache = SharedCache::new(2).unwrap();

        cache.put("k", 1);
        cache.put("k", 2);

        assert_eq!(cache.get(&"k"), Some(2));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.stats().snapshot().inserts, 1);
        assert_eq!(cache.stats().snapshot().updates, 1);
        assert_eq!(cache.stats().snapshot().evictions, 0);
    }

    #[test]
    fn test_cache_remove() {
        let cache = SharedCache::new(4).unwrap();

        cache.put(1, "a");
        assert!(cache.contains(&1));
        assert_eq!(cache.remove(&1), Some("a"));
        assert!(!cache.contains(&1));
        assert!(cache.is_empty());
    }

    #[test]
    fn test_cache_clear() {
        let cache = SharedCache::new(10).unwrap();

        cache.put(0, "data 0");
        cache.put(1, "data 1");
        cache.get(&0);

        assert_eq!(cache.len(), 2);

        cache.clear();

        assert_eq!(cache.len(), 0);
        assert_eq!(cache.stats().snapshot().hits, 0);
        assert_eq!(cache.stats().snapshot().inserts, 0);
    }

    #[test]
    fn test_cache_clone_shares_state() {
        let cache = SharedCache::new(4).unwrap();
        let other = cache.clone();

        other.put(1, "a");

        assert_eq!(cache.get(&1), Some("a"));
        assert_eq!(other.stats().snapshot().hits, 1);
    }

    #[test]
    fn test_cache_concurrent_access() {
        let cache = SharedCache::new(16).unwrap();

        thread::scope(|s| {
            for t in 0..4u64 {
                let cache = cache.clone();
                s.spawn(move || {
                    for i in 0..1000u64 {
                        let key = (t * 1000 + i) % 64;
                        cache.put(key, i);
                        cache.get(&key);
                        assert!(cache.len() <= 16);
                    }
                });
            }
        });

        let stats = cache.stats().snapshot();
        assert_eq!(cache.len(), 16);
        assert_eq!(stats.inserts + stats.updates, 4000);
        assert_eq!(stats.hits + stats.misses, 4000);
        assert_eq!(stats.inserts - stats.evictions, 16);
    }

    #[test]
    fn test_cache_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SharedCache<u64, Vec<u8>>>();
    }
}
