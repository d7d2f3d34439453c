use async_trait::async_trait;

use crate::modules::movie::domain::{
    entities::{MovieRecord, RequestContext},
    repositories::MovieProviderRepository,
};
use crate::modules::provider::infrastructure::{
    external::MovieApiClient, http_client::RetryPolicy,
};
use crate::shared::{
    domain::value_objects::MovieProvider, errors::AppResult, infrastructure::AppConfig,
};

/// Concrete provider data access, dispatching to the matching client
pub struct ProviderRepositoryAdapter {
    cinema_world: MovieApiClient,
    film_world: MovieApiClient,
}

impl ProviderRepositoryAdapter {
    pub fn new(cinema_world: MovieApiClient, film_world: MovieApiClient) -> Self {
        Self {
            cinema_world,
            film_world,
        }
    }

    pub fn from_config(config: &AppConfig) -> AppResult<Self> {
        let retry_policy = RetryPolicy::from_config(config);
        let cinema_world = MovieApiClient::new(
            config.endpoint(MovieProvider::CinemaWorld),
            config.http_timeout,
            retry_policy.clone(),
        )?;
        let film_world = MovieApiClient::new(
            config.endpoint(MovieProvider::FilmWorld),
            config.http_timeout,
            retry_policy,
        )?;
        Ok(Self::new(cinema_world, film_world))
    }

    fn client(&self, provider: MovieProvider) -> &MovieApiClient {
        match provider {
            MovieProvider::CinemaWorld => &self.cinema_world,
            MovieProvider::FilmWorld => &self.film_world,
        }
    }
}

#[async_trait]
impl MovieProviderRepository for ProviderRepositoryAdapter {
    async fn list_movies(
        &self,
        provider: MovieProvider,
        ctx: &RequestContext,
    ) -> AppResult<Vec<MovieRecord>> {
        self.client(provider).list_movies(ctx).await
    }

    async fn get_movie(
        &self,
        provider: MovieProvider,
        id: &str,
        ctx: &RequestContext,
    ) -> AppResult<Option<MovieRecord>> {
        self.client(provider).get_movie(ctx, id).await
    }
}
