use serde::{Deserialize, Deserializer, Serialize};

/// Body of `GET {base}/movies`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MovieListResponse {
    #[serde(rename = "Movies", alias = "movies", default)]
    pub movies: Option<Vec<MovieDto>>,
}

/// One movie on the wire. Summary entries only carry the first few fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MovieDto {
    #[serde(rename = "ID", alias = "id", alias = "Id", default)]
    pub id: Option<String>,
    #[serde(alias = "title", default)]
    pub title: Option<String>,
    #[serde(alias = "year", default, deserialize_with = "string_or_number")]
    pub year: Option<String>,
    #[serde(alias = "type", default)]
    pub r#type: Option<String>,
    #[serde(alias = "poster", default)]
    pub poster: Option<String>,
    #[serde(alias = "price", default, deserialize_with = "string_or_number")]
    pub price: Option<String>,
    #[serde(alias = "rated", default)]
    pub rated: Option<String>,
    #[serde(alias = "released", default)]
    pub released: Option<String>,
    #[serde(alias = "runtime", default)]
    pub runtime: Option<String>,
    #[serde(alias = "genre", default)]
    pub genre: Option<String>,
    #[serde(alias = "director", default)]
    pub director: Option<String>,
    #[serde(alias = "writer", default)]
    pub writer: Option<String>,
    #[serde(alias = "actors", default)]
    pub actors: Option<String>,
    #[serde(alias = "plot", default)]
    pub plot: Option<String>,
    #[serde(alias = "language", default)]
    pub language: Option<String>,
    #[serde(alias = "country", default)]
    pub country: Option<String>,
    #[serde(alias = "awards", default)]
    pub awards: Option<String>,
    #[serde(alias = "metascore", default)]
    pub metascore: Option<String>,
    #[serde(alias = "rating", default)]
    pub rating: Option<String>,
    #[serde(alias = "votes", default)]
    pub votes: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Number(serde_json::Number),
}

// Some upstream records send prices and years as bare numbers
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<StringOrNumber>::deserialize(deserializer)?;
    Ok(value.map(|v| match v {
        StringOrNumber::String(s) => s,
        StringOrNumber::Number(n) => n.to_string(),
    }))
}
