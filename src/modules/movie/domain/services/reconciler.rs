use std::collections::{HashMap, HashSet};
use tracing::debug;

use crate::modules::movie::domain::entities::{MovieComparison, MovieRecord};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::LogContext;

/// Matches the two providers' movies by title and folds them into
/// comparison records
pub struct MovieReconciler;

impl MovieReconciler {
    /// Merge both full catalogs into one record per distinct non-empty title.
    ///
    /// Titles keep first-seen order: CinemaWorld's in fetch order, then
    /// FilmWorld titles CinemaWorld didn't have. When a provider repeats a
    /// title, its first occurrence is the one compared.
    pub fn reconcile_all(
        cinema_world: Vec<MovieRecord>,
        film_world: Vec<MovieRecord>,
    ) -> Vec<MovieComparison> {
        let cinema_world_count = cinema_world.len();
        let film_world_count = film_world.len();

        let titles = Self::title_union(&cinema_world, &film_world);
        let mut cinema_world_by_title = Self::first_by_title(cinema_world);
        let mut film_world_by_title = Self::first_by_title(film_world);

        let comparisons: Vec<MovieComparison> = titles
            .into_iter()
            .map(|title| {
                let cinema_world_movie = cinema_world_by_title.remove(&title);
                let film_world_movie = film_world_by_title.remove(&title);
                MovieComparison::new(Some(title), cinema_world_movie, film_world_movie)
            })
            .filter(MovieComparison::has_any_side)
            .collect();

        LogContext::reconcile_summary(cinema_world_count, film_world_count, comparisons.len());
        comparisons
    }

    /// Combine two independently fetched detail records.
    ///
    /// The ids behind the two records need not denote the same film. Every
    /// present side is kept; the title comes from CinemaWorld when it has
    /// one, otherwise from FilmWorld.
    pub fn reconcile_pair(
        cinema_world: Option<MovieRecord>,
        film_world: Option<MovieRecord>,
    ) -> AppResult<MovieComparison> {
        match (cinema_world, film_world) {
            (None, None) => Err(AppError::NotFound(
                "Neither CinemaWorld nor FilmWorld returned a movie".to_string(),
            )),
            (Some(cw), Some(fw))
                if cw.match_title().is_some() && cw.match_title() == fw.match_title() =>
            {
                let title = cw.title.clone();
                Ok(MovieComparison::new(title, Some(cw), Some(fw)))
            }
            (cinema_world, film_world) => {
                if let (Some(cw), Some(fw)) = (&cinema_world, &film_world) {
                    debug!(
                        "Compared titles differ: CinemaWorld '{:?}' vs FilmWorld '{:?}'",
                        cw.title, fw.title
                    );
                }

                let title = cinema_world
                    .as_ref()
                    .and_then(|m| m.match_title())
                    .or_else(|| film_world.as_ref().and_then(|m| m.match_title()))
                    .map(str::to_string);

                Ok(MovieComparison::new(title, cinema_world, film_world))
            }
        }
    }

    fn title_union(cinema_world: &[MovieRecord], film_world: &[MovieRecord]) -> Vec<String> {
        let mut seen = HashSet::new();
        cinema_world
            .iter()
            .chain(film_world.iter())
            .filter_map(MovieRecord::match_title)
            .filter(|title| seen.insert(*title))
            .map(str::to_string)
            .collect()
    }

    fn first_by_title(movies: Vec<MovieRecord>) -> HashMap<String, MovieRecord> {
        let mut by_title = HashMap::with_capacity(movies.len());
        for movie in movies {
            if let Some(title) = movie.match_title().map(str::to_string) {
                by_title.entry(title).or_insert(movie);
            }
        }
        by_title
    }
}
