pub mod modules;
pub mod shared;

use modules::{
    movie::{
        application::MovieComparisonService,
        domain::repositories::{ComparisonCacheRepository, MovieProviderRepository},
        infrastructure::ComparisonCache,
    },
    provider::ProviderRepositoryAdapter,
};
use shared::{errors::AppResult, AppConfig};
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Wire the comparison service from configuration.
///
/// Also starts the cache sweeper when an interval is configured, so this must
/// run inside a tokio runtime. The sweeper handle is returned to the caller.
pub fn build_movie_service(
    config: &AppConfig,
) -> AppResult<(Arc<MovieComparisonService>, Option<JoinHandle<()>>)> {
    let provider_repo: Arc<dyn MovieProviderRepository> =
        Arc::new(ProviderRepositoryAdapter::from_config(config)?);

    let cache = ComparisonCache::new();
    let cleanup_task = config
        .cache_cleanup_interval
        .and_then(|interval| cache.spawn_cleanup_task(interval));
    let cache_repo: Arc<dyn ComparisonCacheRepository> = Arc::new(cache);

    log::info!(
        "Movie service ready (CinemaWorld: {}, FilmWorld: {}, cache TTL: {:?})",
        config.cinema_world.base_url,
        config.film_world.base_url,
        config.cache_ttl
    );

    let service = MovieComparisonService::new(provider_repo, cache_repo, config.cache_ttl);
    Ok((Arc::new(service), cleanup_task))
}
