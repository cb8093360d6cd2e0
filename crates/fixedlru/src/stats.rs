//! Cache statistics tracking

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Something a cache operation can do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Lookup found its key
    Hit,
    /// Lookup did not find its key
    Miss,
    /// Put of a new key
    Insert,
    /// Put that replaced an existing value
    Update,
    /// Entry displaced by capacity
    Eviction,
}

impl Event {
    const COUNT: usize = 5;

    fn slot(self) -> usize {
        self as usize
    }
}

/// Statistics for cache performance tracking
///
/// One relaxed counter per [`Event`]; read them through [`CacheStats::snapshot`].
#[derive(Debug, Default)]
pub struct CacheStats {
    counters: [AtomicU64; Event::COUNT],
}

/// Point-in-time copy of [`CacheStats`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsSnapshot {
    /// Lookups that found their key
    pub hits: u64,
    /// Lookups that did not
    pub misses: u64,
    /// Puts of a new key
    pub inserts: u64,
    /// Puts that replaced an existing value
    pub updates: u64,
    /// Entries displaced by capacity
    pub evictions: u64,
}

impl CacheStats {
    /// Create new stats tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `event`
    pub fn record(&self, event: Event) {
        self.counters[event.slot()].fetch_add(1, Ordering::Relaxed);
    }

    /// Current total for `event`
    pub fn count(&self, event: Event) -> u64 {
        self.counters[event.slot()].load(Ordering::Relaxed)
    }

    /// Calculate hit ratio (0.0 to 1.0)
    pub fn hit_ratio(&self) -> f64 {
        self.snapshot().hit_ratio()
    }

    /// Copy the current counters
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            hits: self.count(Event::Hit),
            misses: self.count(Event::Miss),
            inserts: self.count(Event::Insert),
            updates: self.count(Event::Update),
            evictions: self.count(Event::Eviction),
        }
    }

    /// Reset all statistics
    pub fn reset(&self) {
        for counter in &self.counters {
            counter.store(0, Ordering::Relaxed);
        }
    }
}

impl StatsSnapshot {
    /// Calculate hit ratio (0.0 to 1.0)
    pub fn hit_ratio(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

impl fmt::Display for StatsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hits={} misses={} inserts={} updates={} evictions={} hit_ratio={:.2}",
            self.hits,
            self.misses,
            self.inserts,
            self.updates,
            self.evictions,
            self.hit_ratio()
        )
    }
}
