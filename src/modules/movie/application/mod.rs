pub mod service;

pub use service::{MovieComparisonService, ALL_MOVIES_CACHE_KEY};
