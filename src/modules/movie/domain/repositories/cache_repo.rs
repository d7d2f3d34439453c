use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::modules::movie::domain::entities::{CachedComparisons, MovieComparison};

/// Repository interface for caching merged movie lists
/// This abstracts the caching mechanism from business logic
#[async_trait]
pub trait ComparisonCacheRepository: Send + Sync {
    /// Fresh snapshot for `key`, or `None` when missing or expired
    async fn get(&self, key: &str) -> Option<CachedComparisons>;

    async fn set(&self, key: &str, comparisons: Vec<MovieComparison>, ttl: Duration);

    async fn invalidate(&self, key: &str);

    /// Clear all cached data
    async fn clear(&self);

    async fn stats(&self) -> CacheStats;
}

/// Cache statistics for monitoring
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
    pub expired_cleanups: u64,
}

impl CacheStats {
    pub fn hit_rate(&self) -> f64 {
        if self.hits + self.misses == 0 {
            0.0
        } else {
            self.hits as f64 / (self.hits + self.misses) as f64
        }
    }
}
