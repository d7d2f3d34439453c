use serde::{Deserialize, Serialize};

use crate::modules::movie::domain::services::price_parser::parse_price;
use crate::shared::domain::value_objects::MovieProvider;

/// Descriptive fields passed through untouched from the provider
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieDetails {
    pub rated: Option<String>,
    pub released: Option<String>,
    pub runtime: Option<String>,
    pub genre: Option<String>,
    pub director: Option<String>,
    pub writer: Option<String>,
    pub actors: Option<String>,
    pub plot: Option<String>,
    pub language: Option<String>,
    pub country: Option<String>,
    pub awards: Option<String>,
    pub poster: Option<String>,
    pub metascore: Option<String>,
    pub rating: Option<String>,
    pub votes: Option<String>,
    #[serde(rename = "type")]
    pub movie_type: Option<String>,
}

/// A single movie as one provider reported it
///
/// Built once per fetch and never changed afterwards; `price` is derived from
/// `price_raw` at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieRecord {
    pub id: Option<String>,
    pub title: Option<String>,
    pub year: Option<String>,
    pub price_raw: Option<String>,
    pub price: Option<f64>,
    pub provider: MovieProvider,
    #[serde(flatten)]
    pub details: MovieDetails,
}

impl MovieRecord {
    pub fn new(
        provider: MovieProvider,
        id: Option<String>,
        title: Option<String>,
        year: Option<String>,
        price_raw: Option<String>,
        details: MovieDetails,
    ) -> Self {
        let price = price_raw.as_deref().and_then(parse_price);
        Self {
            id,
            title,
            year,
            price_raw,
            price,
            provider,
            details,
        }
    }

    /// Title usable as a match key; only an empty title doesn't count
    pub fn match_title(&self) -> Option<&str> {
        self.title.as_deref().filter(|t| !t.is_empty())
    }
}
