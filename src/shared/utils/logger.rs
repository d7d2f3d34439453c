use std::str::FromStr;
use std::sync::Once;
use tracing::{debug, error, info, Level};

static INIT: Once = Once::new();

/// Initialize the logging system
/// This should be called once at application startup. `log` records from
/// dependencies are bridged into the same subscriber.
pub fn init_logger(level: &str) {
    INIT.call_once(|| {
        let max_level = Level::from_str(level.trim()).unwrap_or(Level::INFO);

        let result = tracing_subscriber::fmt()
            .with_max_level(max_level)
            .with_target(false)
            .try_init();

        match result {
            Ok(()) => info!("Logging system initialized at {} level", max_level),
            Err(e) => eprintln!("Warning: logging already initialized: {}", e),
        }
    });
}

/// Structured logging helpers for common patterns
pub struct LogContext;

impl LogContext {
    /// Log upstream API calls
    pub fn api_call(provider: &str, endpoint: &str, status: &str, duration_ms: Option<u64>) {
        match duration_ms {
            Some(duration) => info!(
                "API: {} {} {} in {}ms",
                provider, endpoint, status, duration
            ),
            None => debug!("API: Starting {} {}", provider, endpoint),
        }
    }

    /// Log reconciliation results
    pub fn reconcile_summary(cinema_world: usize, film_world: usize, merged: usize) {
        info!(
            "Reconcile: {} CinemaWorld + {} FilmWorld movies merged into {} titles",
            cinema_world, film_world, merged
        );
    }

    /// Log errors with context
    pub fn error_with_context(error: &dyn std::error::Error, context: &str) {
        error!("{}: {}", context, error);
    }

    /// Log performance metrics
    pub fn performance_metric(operation: &str, duration_ms: u64, additional_info: Option<&str>) {
        match additional_info {
            Some(info) => info!(
                "Performance: {} took {}ms ({})",
                operation, duration_ms, info
            ),
            None => info!("Performance: {} took {}ms", operation, duration_ms),
        }
    }
}

/// Helper for timing operations
pub struct TimedOperation {
    start: std::time::Instant,
    operation: String,
}

impl TimedOperation {
    pub fn new(operation: &str) -> Self {
        debug!("Starting: {}", operation);
        Self {
            start: std::time::Instant::now(),
            operation: operation.to_string(),
        }
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }

    pub fn finish_with_info(self, info: &str) -> u64 {
        let duration = self.elapsed_ms();
        LogContext::performance_metric(&self.operation, duration, Some(info));
        duration
    }
}
