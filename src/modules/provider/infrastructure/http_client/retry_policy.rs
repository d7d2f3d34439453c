//! Retry policy shared by both movie provider clients
//!
//! Failed calls are retried with exponential backoff. Only failures that may
//! clear up on their own are retried: transport errors, 5xx responses and
//! bodies that could not be decoded.

use std::time::Duration;

use crate::shared::errors::AppError;
use crate::shared::infrastructure::AppConfig;

/// Configuration for HTTP retry behavior
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    /// Maximum number of retry attempts after the first call
    pub max_retries: u32,
    /// Base delay, scaled by the multiplier per retry
    pub base_delay: Duration,
    /// Upper bound for a single wait
    pub max_delay: Duration,
    /// Multiplier for exponential backoff
    pub backoff_multiplier: f64,
    /// Add up to 10% random extra delay
    pub jitter: bool,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(60),
            backoff_multiplier: 2.0,
            jitter: false,
        }
    }
}

impl RetryPolicy {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            max_retries: config.max_retries,
            base_delay: config.retry_base_delay,
            jitter: config.retry_jitter,
            ..Self::default()
        }
    }

    /// No retries at all
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }

    /// Delay to wait before retry number `retry` (1-based).
    ///
    /// With the defaults this is 2s, 4s and 8s for retries 1 to 3.
    pub fn calculate_delay(&self, retry: u32) -> Duration {
        let multiplier = self.backoff_multiplier.powi(retry as i32);
        let millis = self.base_delay.as_millis() as f64 * multiplier;

        let mut delay = if millis.is_finite() && millis < self.max_delay.as_millis() as f64 {
            Duration::from_millis(millis as u64)
        } else {
            self.max_delay
        };

        if self.jitter {
            let jitter_ms = (delay.as_millis() as f64 * 0.1 * rand::random::<f64>()) as u64;
            delay += Duration::from_millis(jitter_ms);
        }

        delay
    }

    pub fn is_retryable(&self, error: &AppError) -> bool {
        error.is_retryable()
    }
}
