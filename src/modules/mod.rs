pub mod movie;
pub mod provider;
