mod cached_comparisons;
mod movie_comparison;
mod movie_record;
mod request_context;

pub use cached_comparisons::CachedComparisons;
pub use movie_comparison::MovieComparison;
pub use movie_record::{MovieDetails, MovieRecord};
pub use request_context::{AccessToken, RequestContext, ACCESS_TOKEN_HEADER};
