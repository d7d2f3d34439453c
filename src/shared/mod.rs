// Shared kernel: concepts used by more than one module

pub mod domain; // Shared domain concepts (value objects)
pub mod errors; // Shared error types
pub mod infrastructure; // Shared infrastructure (configuration)
pub mod utils; // Shared utilities (logging)

// Re-exports for convenience
pub use infrastructure::config::AppConfig;
