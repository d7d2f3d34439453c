pub mod provider_repository_adapter;

pub use provider_repository_adapter::ProviderRepositoryAdapter;
