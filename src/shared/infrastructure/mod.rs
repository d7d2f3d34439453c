/// Shared infrastructure concerns
///
/// Infrastructure used by more than one module.
pub mod config;

// Re-exports for convenience
pub use config::{AppConfig, ProviderEndpoint};
