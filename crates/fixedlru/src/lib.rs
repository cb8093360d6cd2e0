//! # fixedlru
//!
//! Fixed-capacity LRU cache with O(1) lookup, insert and eviction.
//!
//! ## Architecture
//! - **Index**: AHash map from key to arena slot (O(1))
//! - **Recency list**: doubly-linked list threaded through an arena, with
//!   head/tail sentinels at fixed slots (O(1) reorder and eviction)
//! - **SharedCache**: single-mutex wrapper with hit/miss statistics
//!
//! ## Example
//! ```
//! use fixedlru::LruCache;
//!
//! let mut cache = LruCache::new(2)?;
//! cache.put(1, "one");
//! cache.put(2, "two");
//! assert_eq!(cache.get(&1), Some(&"one"));
//!
//! cache.put(3, "three"); // evicts 2
//! assert_eq!(cache.get(&2), None);
//! # Ok::<(), fixedlru::Error>(())
//! ```

#![warn(missing_docs)]

mod cache;
mod config;
mod error;
mod lru;
mod stats;

pub use cache::SharedCache;
pub use config::{CacheConfig, CapacityPolicy};
pub use error::{Error, Result};
pub use lru::{Iter, LruCache};
pub use stats::{CacheStats, Event, StatsSnapshot};
