use serde::{Deserialize, Serialize};

use super::MovieRecord;

/// One title with each provider's offer side by side
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieComparison {
    pub title: Option<String>,
    pub cinema_world_movie: Option<MovieRecord>,
    pub film_world_movie: Option<MovieRecord>,
    pub cheapest_price: Option<f64>,
}

impl MovieComparison {
    pub fn new(
        title: Option<String>,
        cinema_world_movie: Option<MovieRecord>,
        film_world_movie: Option<MovieRecord>,
    ) -> Self {
        let cheapest_price = Self::cheapest_of(
            cinema_world_movie.as_ref().and_then(|m| m.price),
            film_world_movie.as_ref().and_then(|m| m.price),
        );

        Self {
            title,
            cinema_world_movie,
            film_world_movie,
            cheapest_price,
        }
    }

    fn cheapest_of(cinema_world: Option<f64>, film_world: Option<f64>) -> Option<f64> {
        match (cinema_world, film_world) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (Some(price), None) | (None, Some(price)) => Some(price),
            (None, None) => None,
        }
    }

    pub fn has_any_side(&self) -> bool {
        self.cinema_world_movie.is_some() || self.film_world_movie.is_some()
    }
}
