use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported movie catalog providers
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum MovieProvider {
    #[serde(rename = "cinemaworld")]
    CinemaWorld,
    #[serde(rename = "filmworld")]
    FilmWorld,
}

impl MovieProvider {
    /// Path segment the provider lives under on the upstream API
    pub fn slug(&self) -> &'static str {
        match self {
            MovieProvider::CinemaWorld => "cinemaworld",
            MovieProvider::FilmWorld => "filmworld",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MovieProvider::CinemaWorld => "CinemaWorld",
            MovieProvider::FilmWorld => "FilmWorld",
        }
    }
}

impl fmt::Display for MovieProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}
