pub mod cache;

pub use cache::ComparisonCache;
