//! Operations issued by the web front-end.
//!
//! The front-end also selects `isLiked @client` on `GetMovieDetails`; that
//! field lives in the client cache only and is stripped before the request
//! reaches this server, so it is not part of these documents.

pub const GET_MOVIES: &str = r#"
query GetMovies {
    movies {
        id
        title
        year
        rating
        medium_cover_image
    }
}
"#;

pub const GET_MOVIE_DETAILS: &str = r#"
query GetMovieDetails($id: Int!) {
    movie(id: $id) {
        id
        title
        year
        rating
        runtime
        genres
        summary
        medium_cover_image
        torrents {
            url
            quality
            size
        }
    }
}
"#;
