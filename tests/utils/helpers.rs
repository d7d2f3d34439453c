use std::sync::Arc;
use std::time::Duration;

use movie_compare_lib::modules::{
    movie::{MovieComparisonService, ComparisonCache},
    provider::{MovieApiClient, ProviderRepositoryAdapter, RetryPolicy},
};
use movie_compare_lib::shared::{
    domain::value_objects::MovieProvider, infrastructure::ProviderEndpoint,
};
use wiremock::MockServer;

pub const CINEMAWORLD_PREFIX: &str = "/api/cinemaworld";
pub const FILMWORLD_PREFIX: &str = "/api/filmworld";

pub fn prefix(provider: MovieProvider) -> &'static str {
    match provider {
        MovieProvider::CinemaWorld => CINEMAWORLD_PREFIX,
        MovieProvider::FilmWorld => FILMWORLD_PREFIX,
    }
}

pub fn endpoint(server: &MockServer, provider: MovieProvider) -> ProviderEndpoint {
    ProviderEndpoint {
        provider,
        base_url: format!("{}{}/", server.uri(), prefix(provider)),
    }
}

/// Retries with millisecond backoff so tests stay fast
pub fn fast_retries(max_retries: u32) -> RetryPolicy {
    RetryPolicy {
        max_retries,
        base_delay: Duration::from_millis(1),
        max_delay: Duration::from_millis(20),
        ..RetryPolicy::default()
    }
}

pub fn client_for(server: &MockServer, provider: MovieProvider, policy: RetryPolicy) -> MovieApiClient {
    MovieApiClient::new(&endpoint(server, provider), Duration::from_secs(5), policy)
        .expect("http client")
}

/// Service against two mock providers, backed by a fresh in-memory cache
pub fn service_for(
    cinema_world: &MockServer,
    film_world: &MockServer,
    policy: RetryPolicy,
    ttl: Duration,
) -> MovieComparisonService {
    let adapter = ProviderRepositoryAdapter::new(
        client_for(cinema_world, MovieProvider::CinemaWorld, policy.clone()),
        client_for(film_world, MovieProvider::FilmWorld, policy),
    );
    MovieComparisonService::new(Arc::new(adapter), Arc::new(ComparisonCache::new()), ttl)
}
