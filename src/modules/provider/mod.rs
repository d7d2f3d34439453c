//! Upstream movie provider access: HTTP clients, retry and the repository
//! adapter the movie module consumes.

pub mod infrastructure;

pub use infrastructure::{MovieApiClient, ProviderRepositoryAdapter, RetryPolicy};
