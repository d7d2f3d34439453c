use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::{Duration, Instant};

use crate::modules::movie::domain::entities::{MovieRecord, RequestContext, ACCESS_TOKEN_HEADER};
use crate::modules::provider::infrastructure::{
    external::{common::USER_AGENT, CommonHttpHandler, RetryUtil},
    http_client::RetryPolicy,
};
use crate::shared::{
    domain::value_objects::MovieProvider,
    errors::{AppError, AppResult},
    infrastructure::ProviderEndpoint,
    utils::LogContext,
};

use super::{
    dto::{MovieDto, MovieListResponse},
    mapper::MovieApiMapper,
};

/// HTTP client for one movie provider's catalog API
pub struct MovieApiClient {
    client: Client,
    provider: MovieProvider,
    base_url: String,
    retry_policy: RetryPolicy,
}

impl MovieApiClient {
    pub fn new(
        endpoint: &ProviderEndpoint,
        timeout: Duration,
        retry_policy: RetryPolicy,
    ) -> AppResult<Self> {
        let client = CommonHttpHandler::create_http_client(timeout, USER_AGENT)?;
        Ok(Self::with_client(client, endpoint, retry_policy))
    }

    pub fn with_client(client: Client, endpoint: &ProviderEndpoint, retry_policy: RetryPolicy) -> Self {
        Self {
            client,
            provider: endpoint.provider,
            base_url: endpoint.base_url.trim_end_matches('/').to_string(),
            retry_policy,
        }
    }

    pub fn provider(&self) -> MovieProvider {
        self.provider
    }

    /// Full catalog summary. A body without a `Movies` array is an empty list.
    pub async fn list_movies(&self, ctx: &RequestContext) -> AppResult<Vec<MovieRecord>> {
        let url = format!("{}/movies", self.base_url);
        let url = url.as_str();
        let operation = format!("{} list movies", self.provider.display_name());

        let response: Option<MovieListResponse> = RetryUtil::with_retry(
            || self.fetch_json(url, "/movies", ctx, false),
            &self.retry_policy,
            &operation,
        )
        .await?;

        let movies = response.and_then(|r| r.movies).unwrap_or_default();
        Ok(MovieApiMapper::to_domain_list(movies, self.provider))
    }

    /// Detail record for one id, `None` when the provider doesn't know it
    pub async fn get_movie(&self, ctx: &RequestContext, id: &str) -> AppResult<Option<MovieRecord>> {
        let url = format!("{}/movie/{}", self.base_url, urlencoding::encode(id));
        let url = url.as_str();
        let operation = format!("{} get movie {}", self.provider.display_name(), id);

        let response: Option<MovieDto> = RetryUtil::with_retry(
            || self.fetch_json(url, "/movie/{id}", ctx, true),
            &self.retry_policy,
            &operation,
        )
        .await?;

        Ok(response.map(|dto| MovieApiMapper::to_domain(dto, self.provider)))
    }

    /// One GET attempt. `Ok(None)` for a JSON `null` body, or for a 404 when
    /// `not_found_is_none` is set.
    async fn fetch_json<T: DeserializeOwned>(
        &self,
        url: &str,
        endpoint: &str,
        ctx: &RequestContext,
        not_found_is_none: bool,
    ) -> AppResult<Option<T>> {
        let provider_name = self.provider.display_name();
        LogContext::api_call(provider_name, endpoint, "started", None);
        let started = Instant::now();

        let mut request = self.client.get(url);
        if let Some(token) = ctx.access_token() {
            request = request.header(ACCESS_TOKEN_HEADER, token.as_str());
        }

        let response = request.send().await.map_err(|e| {
            if e.is_builder() {
                AppError::Configuration(format!("Invalid request to {}: {}", provider_name, e))
            } else {
                CommonHttpHandler::transport_error(self.provider, e)
            }
        })?;

        let status = response.status();
        let elapsed = started.elapsed().as_millis() as u64;
        LogContext::api_call(provider_name, endpoint, status.as_str(), Some(elapsed));

        if not_found_is_none && status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        CommonHttpHandler::handle_response_status(status, self.provider)?;

        let body = response
            .text()
            .await
            .map_err(|e| CommonHttpHandler::transport_error(self.provider, e))?;

        serde_json::from_str::<Option<T>>(&body).map_err(|e| AppError::MalformedResponse {
            provider: self.provider,
            message: format!("Failed to parse {} response: {}", endpoint, e),
        })
    }
}
