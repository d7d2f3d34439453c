mod movie_provider;

pub use movie_provider::MovieProvider;
