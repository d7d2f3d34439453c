use serde::{Deserialize, Serialize};

use super::application::service::MovieComparisonService;
use super::domain::entities::{MovieComparison, RequestContext};
use crate::shared::errors::AppError;

/// Error shape handed to the caller: a status code and a readable message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandError {
    pub status: u16,
    pub message: String,
}

impl From<AppError> for CommandError {
    fn from(error: AppError) -> Self {
        Self {
            status: error.status_code(),
            message: error.to_string(),
        }
    }
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.status)
    }
}

impl std::error::Error for CommandError {}

pub async fn get_movies(
    service: &MovieComparisonService,
    access_token: Option<&str>,
    force_refresh: bool,
) -> Result<Vec<MovieComparison>, CommandError> {
    let ctx = RequestContext::from_header(access_token);
    log::info!("Fetching all movies (force refresh: {})", force_refresh);

    service.list_all(&ctx, force_refresh).await.map_err(|e| {
        log::error!("Failed to list movies: {}", e);
        CommandError::from(e)
    })
}

pub async fn compare_movie(
    service: &MovieComparisonService,
    access_token: Option<&str>,
    cinema_world_id: Option<&str>,
    film_world_id: Option<&str>,
) -> Result<MovieComparison, CommandError> {
    let ctx = RequestContext::from_header(access_token);
    log::info!(
        "Comparing movie (CinemaWorld: {:?}, FilmWorld: {:?})",
        cinema_world_id,
        film_world_id
    );

    service
        .compare(&ctx, cinema_world_id, film_world_id)
        .await
        .map_err(|e| {
            log::error!("Failed to compare movies: {}", e);
            CommandError::from(e)
        })
}

pub fn health_check() -> &'static str {
    "Movie compare service is up"
}
