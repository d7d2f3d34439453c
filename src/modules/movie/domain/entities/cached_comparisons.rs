use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::{Duration, Instant};

use super::MovieComparison;

/// Immutable snapshot of a merged movie list as held by the cache
#[derive(Debug, Clone)]
pub struct CachedComparisons {
    pub comparisons: Arc<Vec<MovieComparison>>,
    pub created_at: DateTime<Utc>,
    pub ttl: Duration,
    stored_at: Instant,
}

impl CachedComparisons {
    pub fn new(comparisons: Vec<MovieComparison>, ttl: Duration) -> Self {
        Self {
            comparisons: Arc::new(comparisons),
            created_at: Utc::now(),
            ttl,
            stored_at: Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.stored_at.elapsed() >= self.ttl
    }

    pub fn age(&self) -> Duration {
        self.stored_at.elapsed()
    }
}
