use std::sync::Arc;

use async_graphql::Object;
use yts::{Movie, YtsClient};

/// Root query. Each field makes exactly one upstream call and never fails:
/// upstream trouble degrades to an empty list or null.
pub struct QueryRoot {
    yts: Arc<YtsClient>,
}

impl QueryRoot {
    pub fn new(yts: Arc<YtsClient>) -> Self {
        Self { yts }
    }
}

#[Object(name = "Query")]
impl QueryRoot {
    /// Movie summaries, in upstream order. Empty when upstream is unavailable.
    async fn movies(&self) -> Option<Vec<Option<Movie>>> {
        match self.yts.list_movies().await {
            Ok(data) => Some(data.movies),
            Err(e) => {
                tracing::warn!(timeout = e.is_timeout(), "Failed to fetch movies: {}", e);
                Some(Vec::new())
            }
        }
    }

    /// Full record for one movie. Null when the movie does not exist or
    /// upstream is unavailable.
    async fn movie(&self, id: i32) -> Option<Movie> {
        match self.yts.movie_details(id).await {
            Ok(movie) => movie,
            Err(e) => {
                tracing::warn!(
                    movie_id = id,
                    timeout = e.is_timeout(),
                    "Failed to fetch movie details: {}",
                    e
                );
                None
            }
        }
    }
}
