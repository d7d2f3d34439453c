use async_trait::async_trait;

use crate::modules::movie::domain::entities::{MovieRecord, RequestContext};
use crate::shared::{domain::value_objects::MovieProvider, errors::AppResult};

/// Repository interface for movie data held by the upstream providers
///
/// Implementations own transport and retry concerns; callers decide how to
/// degrade when a provider fails.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MovieProviderRepository: Send + Sync {
    /// Full catalog of one provider
    async fn list_movies(
        &self,
        provider: MovieProvider,
        ctx: &RequestContext,
    ) -> AppResult<Vec<MovieRecord>>;

    /// Single movie by provider-specific id; `None` when the provider has no such movie
    async fn get_movie(
        &self,
        provider: MovieProvider,
        id: &str,
        ctx: &RequestContext,
    ) -> AppResult<Option<MovieRecord>>;
}
