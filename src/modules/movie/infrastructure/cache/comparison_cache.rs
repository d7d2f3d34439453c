use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::modules::movie::domain::{
    entities::{CachedComparisons, MovieComparison},
    repositories::{CacheStats, ComparisonCacheRepository},
};

/// In-memory store for merged movie lists with passive TTL expiry
///
/// Expired entries are dropped on the next read. A background sweeper can be
/// started with [`ComparisonCache::spawn_cleanup_task`] to reclaim entries
/// nobody reads again.
#[derive(Debug, Clone, Default)]
pub struct ComparisonCache {
    entries: Arc<DashMap<String, CachedComparisons>>,
    hits: Arc<AtomicU64>,
    misses: Arc<AtomicU64>,
    cleanups: Arc<AtomicU64>,
    cleanup_task_started: Arc<AtomicBool>,
}

impl ComparisonCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove every expired entry, returning how many were dropped
    pub fn purge_expired(&self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired());
        let removed = before.saturating_sub(self.entries.len());

        if removed > 0 {
            self.cleanups.fetch_add(removed as u64, Ordering::Relaxed);
            debug!("Cleaned up {} expired cache entries", removed);
        }
        removed
    }

    /// Start the periodic sweeper. Only the first call spawns a task; later
    /// calls return `None`. Must be called inside a tokio runtime.
    pub fn spawn_cleanup_task(&self, interval: Duration) -> Option<JoinHandle<()>> {
        if self
            .cleanup_task_started
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            return None;
        }

        let cache = self.clone();
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            // First tick completes immediately
            ticker.tick().await;
            loop {
                ticker.tick().await;
                cache.purge_expired();
            }
        });

        debug!("Background cache cleanup started, interval {:?}", interval);
        Some(handle)
    }
}

#[async_trait]
impl ComparisonCacheRepository for ComparisonCache {
    async fn get(&self, key: &str) -> Option<CachedComparisons> {
        let expired = match self.entries.get(key) {
            Some(entry) if !entry.is_expired() => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                debug!("Cache hit for key: {} (age {:?})", key, entry.age());
                return Some(entry.value().clone());
            }
            Some(_) => true,
            None => false,
        };

        if expired {
            // Only drop it if no fresher value was stored in the meantime
            if self
                .entries
                .remove_if(key, |_, entry| entry.is_expired())
                .is_some()
            {
                self.cleanups.fetch_add(1, Ordering::Relaxed);
                debug!("Removed expired cache entry for key: {}", key);
            }
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        debug!("Cache miss for key: {}", key);
        None
    }

    async fn set(&self, key: &str, comparisons: Vec<MovieComparison>, ttl: Duration) {
        let count = comparisons.len();
        self.entries
            .insert(key.to_string(), CachedComparisons::new(comparisons, ttl));
        debug!(
            "Cached {} comparisons for key: {} with TTL: {:?}",
            count, key, ttl
        );
    }

    async fn invalidate(&self, key: &str) {
        if self.entries.remove(key).is_some() {
            info!("Invalidated cache entry for key: {}", key);
        }
    }

    async fn clear(&self) {
        self.entries.clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
        self.cleanups.store(0, Ordering::Relaxed);
        info!("Cache cleared");
    }

    async fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.entries.len(),
            expired_cleanups: self.cleanups.load(Ordering::Relaxed),
        }
    }
}
