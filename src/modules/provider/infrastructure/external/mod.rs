pub mod common;
pub mod movie_api;
pub mod retry_util;

pub use common::CommonHttpHandler;
pub use movie_api::MovieApiClient;
pub use retry_util::RetryUtil;
