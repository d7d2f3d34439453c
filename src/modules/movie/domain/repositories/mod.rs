mod cache_repo;
mod movie_provider_repo;

pub use cache_repo::*;
pub use movie_provider_repo::*;
