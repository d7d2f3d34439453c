pub mod client;
pub mod dto;
pub mod mapper;

pub use client::MovieApiClient;
pub use mapper::MovieApiMapper;
