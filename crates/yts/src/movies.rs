use crate::{
    models::{Movie, MovieDetailsData, MovieListData},
    YtsClient,
};

impl YtsClient {
    /// List movies.
    ///
    /// GET /list_movies.json
    ///
    /// Only the content type is checked on this endpoint, not the status.
    pub async fn list_movies(&self) -> crate::Result<MovieListData> {
        let url = self.url("/list_movies.json");
        let response = self.client().get(&url).send().await?;
        self.handle_response(response).await
    }

    /// Get movie details. `Ok(None)` when upstream has no movie for the id.
    ///
    /// GET /movie_details.json?movie_id={movie_id}
    pub async fn movie_details(&self, movie_id: i32) -> crate::Result<Option<Movie>> {
        let url = self.url("/movie_details.json");
        let response = self
            .client()
            .get(&url)
            .query(&[("movie_id", movie_id)])
            .send()
            .await?;
        let response = self.ensure_success(response).await?;
        let data: MovieDetailsData = self.handle_response(response).await?;
        Ok(data.movie)
    }
}
