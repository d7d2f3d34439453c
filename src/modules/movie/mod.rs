pub mod application;
pub mod commands;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types
pub use application::MovieComparisonService;
pub use commands::CommandError;
pub use domain::entities::{MovieComparison, MovieDetails, MovieRecord, RequestContext};
pub use infrastructure::ComparisonCache;
