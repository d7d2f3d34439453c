use futures::future::OptionFuture;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::modules::movie::domain::{
    entities::{MovieComparison, MovieRecord, RequestContext},
    repositories::{CacheStats, ComparisonCacheRepository, MovieProviderRepository},
    services::MovieReconciler,
};
use crate::shared::{
    domain::value_objects::MovieProvider,
    errors::{AppError, AppResult},
    utils::{LogContext, TimedOperation},
};

/// Cache key of the merged catalog
pub const ALL_MOVIES_CACHE_KEY: &str = "all_movies";

/// Application service comparing movie prices across both providers
///
/// Key responsibilities:
/// - Fetch both catalogs concurrently and merge them by title
/// - Cache the merged catalog, but only when both providers contributed
/// - Compare two specific movies by their provider ids
#[derive(Clone)]
pub struct MovieComparisonService {
    providers: Arc<dyn MovieProviderRepository>,
    cache: Arc<dyn ComparisonCacheRepository>,
    cache_ttl: Duration,
    /// Serializes refreshes so concurrent misses share one upstream fetch
    refresh_lock: Arc<Mutex<()>>,
}

impl MovieComparisonService {
    pub fn new(
        providers: Arc<dyn MovieProviderRepository>,
        cache: Arc<dyn ComparisonCacheRepository>,
        cache_ttl: Duration,
    ) -> Self {
        Self {
            providers,
            cache,
            cache_ttl,
            refresh_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Every known title with both providers' offers.
    ///
    /// Served from cache unless it is empty, stale or `force_refresh` is
    /// set. A provider that fails contributes an empty list instead of
    /// failing the whole call.
    pub async fn list_all(
        &self,
        ctx: &RequestContext,
        force_refresh: bool,
    ) -> AppResult<Vec<MovieComparison>> {
        if !force_refresh {
            if let Some(cached) = self.cache.get(ALL_MOVIES_CACHE_KEY).await {
                info!(
                    "Cache hit for key {}, returning {} cached comparisons",
                    ALL_MOVIES_CACHE_KEY,
                    cached.comparisons.len()
                );
                return Ok(cached.comparisons.as_ref().clone());
            }
        }

        let _guard = self.refresh_lock.lock().await;

        // Another caller may have refreshed while this one waited
        if !force_refresh {
            if let Some(cached) = self.cache.get(ALL_MOVIES_CACHE_KEY).await {
                debug!("Cache populated by a concurrent refresh");
                return Ok(cached.comparisons.as_ref().clone());
            }
        }

        info!(
            "Cache miss or forced refresh for key {}, fetching from providers",
            ALL_MOVIES_CACHE_KEY
        );
        self.log_token_presence(ctx);

        let timer = TimedOperation::new("list all movies");
        let (cinema_world, film_world) = tokio::join!(
            self.fetch_catalog(MovieProvider::CinemaWorld, ctx),
            self.fetch_catalog(MovieProvider::FilmWorld, ctx),
        );

        let both_present = !cinema_world.is_empty() && !film_world.is_empty();
        let comparisons = MovieReconciler::reconcile_all(cinema_world, film_world);

        if both_present {
            info!(
                "Caching data for key {} as both CinemaWorld and FilmWorld have data",
                ALL_MOVIES_CACHE_KEY
            );
            self.cache
                .set(ALL_MOVIES_CACHE_KEY, comparisons.clone(), self.cache_ttl)
                .await;
        } else {
            warn!(
                "Skipping cache for key {} as one or both provider catalogs are empty",
                ALL_MOVIES_CACHE_KEY
            );
        }

        timer.finish_with_info(&format!("{} titles", comparisons.len()));
        Ok(comparisons)
    }

    /// Compare one CinemaWorld movie with one FilmWorld movie.
    ///
    /// Either id may be omitted, but not both. A side whose fetch fails or
    /// finds nothing is left empty; when both are empty the comparison is
    /// `NotFound`.
    pub async fn compare(
        &self,
        ctx: &RequestContext,
        cinema_world_id: Option<&str>,
        film_world_id: Option<&str>,
    ) -> AppResult<MovieComparison> {
        let cinema_world_id = cinema_world_id.filter(|id| !id.trim().is_empty());
        let film_world_id = film_world_id.filter(|id| !id.trim().is_empty());

        if cinema_world_id.is_none() && film_world_id.is_none() {
            return Err(AppError::InvalidArgument(
                "At least one of cinemaWorldId or filmWorldId is required".to_string(),
            ));
        }

        self.log_token_presence(ctx);

        let cinema_world_fetch: OptionFuture<_> = cinema_world_id
            .map(|id| self.fetch_detail(MovieProvider::CinemaWorld, id, ctx))
            .into();
        let film_world_fetch: OptionFuture<_> = film_world_id
            .map(|id| self.fetch_detail(MovieProvider::FilmWorld, id, ctx))
            .into();

        let (cinema_world, film_world) = tokio::join!(cinema_world_fetch, film_world_fetch);

        let comparison =
            MovieReconciler::reconcile_pair(cinema_world.flatten(), film_world.flatten())?;

        info!(
            "Movie comparison for '{}' (CinemaWorld: {:?}, FilmWorld: {:?}), cheapest {:?}",
            comparison.title.as_deref().unwrap_or("<untitled>"),
            cinema_world_id,
            film_world_id,
            comparison.cheapest_price
        );
        Ok(comparison)
    }

    /// Drop the cached catalog so the next listing goes upstream
    pub async fn invalidate_cache(&self) {
        self.cache.invalidate(ALL_MOVIES_CACHE_KEY).await;
    }

    pub async fn cache_stats(&self) -> CacheStats {
        self.cache.stats().await
    }

    async fn fetch_catalog(&self, provider: MovieProvider, ctx: &RequestContext) -> Vec<MovieRecord> {
        match self.providers.list_movies(provider, ctx).await {
            Ok(movies) => {
                debug!("{} returned {} movies", provider, movies.len());
                movies
            }
            Err(e) => {
                LogContext::error_with_context(
                    &e,
                    &format!("Error fetching movies from {}, continuing without them", provider),
                );
                Vec::new()
            }
        }
    }

    async fn fetch_detail(
        &self,
        provider: MovieProvider,
        id: &str,
        ctx: &RequestContext,
    ) -> Option<MovieRecord> {
        match self.providers.get_movie(provider, id, ctx).await {
            Ok(Some(movie)) => Some(movie),
            Ok(None) => {
                debug!("{} has no movie with ID {}", provider, id);
                None
            }
            Err(e) => {
                LogContext::error_with_context(
                    &e,
                    &format!("Error fetching movie details from {} for ID {}", provider, id),
                );
                None
            }
        }
    }

    fn log_token_presence(&self, ctx: &RequestContext) {
        if ctx.has_token() {
            debug!("Forwarding x-access-token to providers");
        } else {
            warn!("No x-access-token provided in request headers");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::movie::domain::entities::MovieDetails;
    use crate::modules::movie::domain::repositories::MockMovieProviderRepository;
    use crate::modules::movie::infrastructure::ComparisonCache;
    use crate::modules::provider::infrastructure::{external::RetryUtil, RetryPolicy};
    use async_trait::async_trait;
    use mockall::predicate::eq;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::time::Instant;

    fn movie(provider: MovieProvider, id: &str, title: &str, price: &str) -> MovieRecord {
        MovieRecord::new(
            provider,
            Some(id.to_string()),
            Some(title.to_string()),
            None,
            Some(price.to_string()),
            MovieDetails::default(),
        )
    }

    fn service_with(
        providers: MockMovieProviderRepository,
        ttl: Duration,
    ) -> (MovieComparisonService, Arc<ComparisonCache>) {
        let cache = Arc::new(ComparisonCache::new());
        let service = MovieComparisonService::new(Arc::new(providers), cache.clone(), ttl);
        (service, cache)
    }

    fn catalogs(mock: &mut MockMovieProviderRepository, times: usize) {
        mock.expect_list_movies()
            .with(eq(MovieProvider::CinemaWorld), mockall::predicate::always())
            .times(times)
            .returning(|_, _| {
                Ok(vec![
                    movie(MovieProvider::CinemaWorld, "cw1", "X", "9.99"),
                    movie(MovieProvider::CinemaWorld, "cw2", "Y", "15.00"),
                ])
            });
        mock.expect_list_movies()
            .with(eq(MovieProvider::FilmWorld), mockall::predicate::always())
            .times(times)
            .returning(|_, _| Ok(vec![movie(MovieProvider::FilmWorld, "fw1", "X", "7.50")]));
    }

    #[tokio::test]
    async fn test_second_listing_within_ttl_is_served_from_cache() {
        let mut mock = MockMovieProviderRepository::new();
        catalogs(&mut mock, 1);
        let (service, _) = service_with(mock, Duration::from_secs(60));
        let ctx = RequestContext::default();

        let first = service.list_all(&ctx, false).await.unwrap();
        let second = service.list_all(&ctx, false).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
        assert_eq!(first[0].cheapest_price, Some(7.5));
        assert_eq!(service.cache_stats().await.hits, 1);
    }

    #[tokio::test]
    async fn test_forced_refresh_always_refetches() {
        let mut mock = MockMovieProviderRepository::new();
        catalogs(&mut mock, 2);
        let (service, _) = service_with(mock, Duration::from_secs(60));
        let ctx = RequestContext::default();

        service.list_all(&ctx, false).await.unwrap();
        let refreshed = service.list_all(&ctx, true).await.unwrap();
        assert_eq!(refreshed.len(), 2);
    }

    #[tokio::test]
    async fn test_invalidation_forces_an_upstream_fetch() {
        let mut mock = MockMovieProviderRepository::new();
        catalogs(&mut mock, 2);
        let (service, _) = service_with(mock, Duration::from_secs(60));
        let ctx = RequestContext::default();

        service.list_all(&ctx, false).await.unwrap();
        service.invalidate_cache().await;
        service.list_all(&ctx, false).await.unwrap();
    }

    #[tokio::test]
    async fn test_partial_catalog_is_returned_but_not_cached() {
        let mut mock = MockMovieProviderRepository::new();
        mock.expect_list_movies()
            .with(eq(MovieProvider::CinemaWorld), mockall::predicate::always())
            .times(2)
            .returning(|_, _| Ok(vec![movie(MovieProvider::CinemaWorld, "cw1", "X", "9.99")]));
        mock.expect_list_movies()
            .with(eq(MovieProvider::FilmWorld), mockall::predicate::always())
            .times(2)
            .returning(|provider, _| Err(AppError::Upstream { provider, status: 503 }));
        let (service, cache) = service_with(mock, Duration::from_secs(60));
        let ctx = RequestContext::default();

        let first = service.list_all(&ctx, false).await.unwrap();
        assert_eq!(first.len(), 1);
        assert!(first[0].film_world_movie.is_none());
        assert!(cache.get(ALL_MOVIES_CACHE_KEY).await.is_none());

        // Not cached, so the second call goes upstream again
        service.list_all(&ctx, false).await.unwrap();
    }

    #[tokio::test]
    async fn test_empty_catalog_skips_cache() {
        let mut mock = MockMovieProviderRepository::new();
        mock.expect_list_movies()
            .with(eq(MovieProvider::CinemaWorld), mockall::predicate::always())
            .returning(|_, _| Ok(vec![]));
        mock.expect_list_movies()
            .with(eq(MovieProvider::FilmWorld), mockall::predicate::always())
            .returning(|_, _| Ok(vec![movie(MovieProvider::FilmWorld, "fw1", "X", "7.50")]));
        let (service, cache) = service_with(mock, Duration::from_secs(60));

        let result = service
            .list_all(&RequestContext::default(), false)
            .await
            .unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(cache.stats().await.entries, 0);
    }

    #[tokio::test]
    async fn test_compare_matching_titles_picks_cheapest() {
        let mut mock = MockMovieProviderRepository::new();
        mock.expect_get_movie()
            .withf(|provider, id, _| *provider == MovieProvider::CinemaWorld && id == "cw1")
            .returning(|_, _, _| Ok(Some(movie(MovieProvider::CinemaWorld, "cw1", "X", "9.99"))));
        mock.expect_get_movie()
            .withf(|provider, id, _| *provider == MovieProvider::FilmWorld && id == "fw1")
            .returning(|_, _, _| Ok(Some(movie(MovieProvider::FilmWorld, "fw1", "X", "7.50"))));
        let (service, _) = service_with(mock, Duration::from_secs(60));

        let comparison = service
            .compare(&RequestContext::default(), Some("cw1"), Some("fw1"))
            .await
            .unwrap();

        assert_eq!(comparison.title.as_deref(), Some("X"));
        assert_eq!(comparison.cheapest_price, Some(7.5));
    }

    #[tokio::test]
    async fn test_compare_with_one_id_skips_the_other_provider() {
        let mut mock = MockMovieProviderRepository::new();
        mock.expect_get_movie()
            .withf(|provider, _, _| *provider == MovieProvider::CinemaWorld)
            .times(1)
            .returning(|_, _, _| Ok(Some(movie(MovieProvider::CinemaWorld, "cw1", "X", "9.99"))));
        mock.expect_get_movie()
            .withf(|provider, _, _| *provider == MovieProvider::FilmWorld)
            .never();
        let (service, _) = service_with(mock, Duration::from_secs(60));

        let comparison = service
            .compare(&RequestContext::default(), Some("cw1"), None)
            .await
            .unwrap();

        assert!(comparison.cinema_world_movie.is_some());
        assert!(comparison.film_world_movie.is_none());
        assert_eq!(comparison.cheapest_price, Some(9.99));
    }

    #[tokio::test]
    async fn test_compare_failure_on_one_side_keeps_the_other() {
        let mut mock = MockMovieProviderRepository::new();
        mock.expect_get_movie()
            .withf(|provider, _, _| *provider == MovieProvider::CinemaWorld)
            .returning(|provider, _, _| {
                Err(AppError::Transport {
                    provider,
                    message: "connection refused".to_string(),
                })
            });
        mock.expect_get_movie()
            .withf(|provider, _, _| *provider == MovieProvider::FilmWorld)
            .returning(|_, _, _| Ok(Some(movie(MovieProvider::FilmWorld, "fw1", "Y", "3.00"))));
        let (service, _) = service_with(mock, Duration::from_secs(60));

        let comparison = service
            .compare(&RequestContext::default(), Some("cw1"), Some("fw1"))
            .await
            .unwrap();

        assert_eq!(comparison.title.as_deref(), Some("Y"));
        assert!(comparison.cinema_world_movie.is_none());
    }

    #[tokio::test]
    async fn test_compare_forwards_ids_as_given() {
        let mut mock = MockMovieProviderRepository::new();
        mock.expect_get_movie()
            .withf(|provider, id, _| *provider == MovieProvider::CinemaWorld && id == " cw1 ")
            .times(1)
            .returning(|_, _, _| Ok(Some(movie(MovieProvider::CinemaWorld, " cw1 ", "X", "9.99"))));
        mock.expect_get_movie()
            .withf(|provider, _, _| *provider == MovieProvider::FilmWorld)
            .never();
        let (service, _) = service_with(mock, Duration::from_secs(60));

        let comparison = service
            .compare(&RequestContext::default(), Some(" cw1 "), Some(" "))
            .await
            .unwrap();

        assert_eq!(comparison.title.as_deref(), Some("X"));
        assert!(comparison.film_world_movie.is_none());
    }

    #[tokio::test]
    async fn test_compare_with_nothing_found_is_not_found() {
        let mut mock = MockMovieProviderRepository::new();
        mock.expect_get_movie().returning(|_, _, _| Ok(None));
        let (service, _) = service_with(mock, Duration::from_secs(60));

        let err = service
            .compare(&RequestContext::default(), Some("missing"), Some("missing"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_compare_without_ids_is_invalid() {
        let mut mock = MockMovieProviderRepository::new();
        mock.expect_get_movie().never();
        let (service, _) = service_with(mock, Duration::from_secs(60));

        let err = service
            .compare(&RequestContext::default(), None, Some("  "))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidArgument(_)));
        assert_eq!(err.status_code(), 400);
    }

    /// CinemaWorld keeps answering 503 through the default retry schedule
    /// while FilmWorld answers at once
    struct SlowCinemaWorld {
        film_world_calls: AtomicUsize,
        film_world_answered_at: std::sync::Mutex<Option<Instant>>,
    }

    #[async_trait]
    impl MovieProviderRepository for SlowCinemaWorld {
        async fn list_movies(
            &self,
            provider: MovieProvider,
            _ctx: &RequestContext,
        ) -> AppResult<Vec<MovieRecord>> {
            match provider {
                MovieProvider::CinemaWorld => {
                    RetryUtil::with_retry(
                        move || async move { Err(AppError::Upstream { provider, status: 503 }) },
                        &RetryPolicy::default(),
                        "list CinemaWorld movies",
                    )
                    .await
                }
                MovieProvider::FilmWorld => {
                    self.film_world_calls.fetch_add(1, Ordering::SeqCst);
                    *self.film_world_answered_at.lock().unwrap() = Some(Instant::now());
                    Ok(vec![movie(MovieProvider::FilmWorld, "fw1", "X", "7.50")])
                }
            }
        }

        async fn get_movie(
            &self,
            _provider: MovieProvider,
            _id: &str,
            _ctx: &RequestContext,
        ) -> AppResult<Option<MovieRecord>> {
            Ok(None)
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_provider_does_not_delay_the_other() {
        let providers = Arc::new(SlowCinemaWorld {
            film_world_calls: AtomicUsize::new(0),
            film_world_answered_at: std::sync::Mutex::new(None),
        });
        let service = MovieComparisonService::new(
            providers.clone(),
            Arc::new(ComparisonCache::new()),
            Duration::from_secs(60),
        );

        let started = Instant::now();
        let result = service
            .list_all(&RequestContext::default(), false)
            .await
            .unwrap();
        let elapsed = started.elapsed();

        // 2s + 4s + 8s of backoff before CinemaWorld gives up
        assert!(elapsed >= Duration::from_secs(14), "elapsed {:?}", elapsed);
        assert!(elapsed < Duration::from_secs(15), "elapsed {:?}", elapsed);
        assert_eq!(providers.film_world_calls.load(Ordering::SeqCst), 1);
        let answered_at = providers.film_world_answered_at.lock().unwrap().unwrap();
        assert!(answered_at.duration_since(started) < Duration::from_secs(1));

        assert_eq!(result.len(), 1);
        assert!(result[0].cinema_world_movie.is_none());
        assert_eq!(result[0].cheapest_price, Some(7.5));
    }
}
