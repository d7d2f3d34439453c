use std::future::Future;
use tokio::time::sleep;
use tracing::{debug, warn};

use crate::modules::provider::infrastructure::http_client::RetryPolicy;
use crate::shared::errors::{AppError, AppResult};

/// Retry utility for provider calls with exponential backoff
pub struct RetryUtil;

impl RetryUtil {
    /// Run `operation` until it succeeds, fails with a non-retryable error,
    /// or the policy's retries are used up. The last error is returned.
    pub async fn with_retry<F, Fut, T>(
        operation: F,
        policy: &RetryPolicy,
        operation_name: &str,
    ) -> AppResult<T>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = AppResult<T>>,
    {
        let mut last_error = None;

        for attempt in 0..=policy.max_retries {
            match operation().await {
                Ok(result) => {
                    if attempt > 0 {
                        debug!(
                            "{} succeeded on attempt {} after {} retries",
                            operation_name,
                            attempt + 1,
                            attempt
                        );
                    }
                    return Ok(result);
                }
                Err(error) => {
                    if !policy.is_retryable(&error) {
                        debug!(
                            "{} failed with non-retryable error: {}",
                            operation_name, error
                        );
                        return Err(error);
                    }

                    if attempt < policy.max_retries {
                        let delay = policy.calculate_delay(attempt + 1);
                        warn!(
                            "{} failed on attempt {} ({}), retrying in {:?}",
                            operation_name,
                            attempt + 1,
                            error,
                            delay
                        );
                        sleep(delay).await;
                    } else {
                        warn!(
                            "{} failed on final attempt {} ({}), giving up",
                            operation_name,
                            attempt + 1,
                            error
                        );
                    }
                    last_error = Some(error);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| {
            AppError::Internal(format!("{}: all retries exhausted", operation_name))
        }))
    }
}
