//! Cache configuration
//!
//! A configuration can be built in code or loaded from a JSON document:
//!
//! ```json
//! { "capacity": 1024, "policy": "clamp" }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Error, Result};

/// What to do with a capacity of zero
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapacityPolicy {
    /// Refuse to build the cache
    #[default]
    Reject,

    /// Raise the capacity to 1 and log a warning
    Clamp,
}

/// Construction parameters for [`LruCache`](crate::LruCache)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Maximum number of entries
    pub capacity: usize,

    /// Handling of an invalid capacity
    #[serde(default)]
    pub policy: CapacityPolicy,
}

impl CacheConfig {
    /// Create a config with the default (rejecting) capacity policy
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            policy: CapacityPolicy::default(),
        }
    }

    /// Set the capacity policy
    pub fn with_policy(mut self, policy: CapacityPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Parse a config from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a config from a JSON file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Apply the policy and return the capacity the cache will use
    pub fn resolve_capacity(&self) -> Result<usize> {
        match (self.capacity, self.policy) {
            (0, CapacityPolicy::Reject) => Err(Error::InvalidCapacity(0)),
            (0, CapacityPolicy::Clamp) => {
                warn!("Cache capacity 0 clamped to 1");
                Ok(1)
            }
            (capacity, _) => Ok(capacity),
        }
    }
}
