pub mod adapters;
pub mod external;
pub mod http_client;

pub use adapters::ProviderRepositoryAdapter;
pub use external::MovieApiClient;
pub use http_client::RetryPolicy;
