/// Wire-format movie payloads using builder pattern
///
/// Produces JSON the way the provider APIs send it: PascalCase keys and
/// string prices.
use serde_json::{json, Value};

pub struct MovieJsonFactory {
    id: String,
    title: Option<String>,
    year: String,
    price: Option<String>,
    director: Option<String>,
}

impl MovieJsonFactory {
    pub fn new(id: &str, title: &str) -> Self {
        Self {
            id: id.to_string(),
            title: Some(title.to_string()),
            year: "1977".to_string(),
            price: None,
            director: None,
        }
    }

    pub fn price(mut self, price: &str) -> Self {
        self.price = Some(price.to_string());
        self
    }

    pub fn without_title(mut self) -> Self {
        self.title = None;
        self
    }

    pub fn director(mut self, director: &str) -> Self {
        self.director = Some(director.to_string());
        self
    }

    /// Summary entry as found in the `Movies` list
    pub fn summary(&self) -> Value {
        json!({
            "ID": self.id,
            "Title": self.title,
            "Year": self.year,
            "Type": "movie",
            "Poster": format!("https://images.test/{}.jpg", self.id),
        })
    }

    /// Full detail record, including price
    pub fn detail(&self) -> Value {
        json!({
            "ID": self.id,
            "Title": self.title,
            "Year": self.year,
            "Type": "movie",
            "Rated": "PG",
            "Director": self.director,
            "Price": self.price,
        })
    }

    /// List entry carrying a price, as some catalogs send it
    pub fn priced_summary(&self) -> Value {
        let mut value = self.summary();
        value["Price"] = json!(self.price);
        value
    }
}

pub fn movie_list(movies: &[MovieJsonFactory]) -> Value {
    json!({ "Movies": movies.iter().map(MovieJsonFactory::priced_summary).collect::<Vec<_>>() })
}
