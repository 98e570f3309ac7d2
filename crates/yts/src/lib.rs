mod client;
mod error;
mod movies;
pub mod models;

#[cfg(any(test, feature = "test-util"))]
pub mod testing;

pub use client::{YtsClient, DEFAULT_BASE_URL};
pub use error::YtsError;
pub use models::{Movie, MovieDetailsData, MovieListData, Torrent};

pub type Result<T> = std::result::Result<T, YtsError>;
