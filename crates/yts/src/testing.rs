//! In-process stand-in for the YTS API, served by axum on an ephemeral port.
//!
//! Available to other crates through the `test-util` feature.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    extract::{Query, RawQuery, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};

/// A fixed response the fake upstream replies with.
#[derive(Debug, Clone)]
pub struct Canned {
    pub status: StatusCode,
    pub content_type: &'static str,
    pub body: String,
}

impl Canned {
    pub fn json(body: serde_json::Value) -> Self {
        Self {
            status: StatusCode::OK,
            content_type: "application/json",
            body: body.to_string(),
        }
    }

    pub fn html(status: StatusCode) -> Self {
        Self {
            status,
            content_type: "text/html; charset=UTF-8",
            body: "<html><body>Service Unavailable</body></html>".to_string(),
        }
    }

    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }
}

#[derive(Debug, Clone)]
enum DetailsReply {
    Fixed(Canned),
    /// Answer with a movie whose id and title derive from `movie_id`,
    /// after a delay that grows as the id shrinks.
    EchoId,
}

#[derive(Clone)]
struct FakeState {
    list: Canned,
    details: DetailsReply,
    hits: Arc<Mutex<Vec<String>>>,
}

pub struct FakeYts {
    pub base_url: String,
    hits: Arc<Mutex<Vec<String>>>,
}

impl FakeYts {
    pub async fn start(list: Canned, details: Canned) -> Self {
        Self::serve(list, DetailsReply::Fixed(details)).await
    }

    /// Details requests are answered per id, so concurrent callers can check
    /// they each got their own movie back.
    pub async fn start_echoing(list: Canned) -> Self {
        Self::serve(list, DetailsReply::EchoId).await
    }

    async fn serve(list: Canned, details: DetailsReply) -> Self {
        let hits = Arc::new(Mutex::new(Vec::new()));
        let state = FakeState {
            list,
            details,
            hits: Arc::clone(&hits),
        };
        let app = Router::new()
            .route("/api/v2/list_movies.json", get(serve_list_movies))
            .route("/api/v2/movie_details.json", get(serve_movie_details))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind fake upstream");
        let addr: SocketAddr = listener.local_addr().expect("fake upstream address");
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self {
            base_url: format!("http://{}/api/v2", addr),
            hits,
        }
    }

    /// Requests received so far, as `path` or `path?query`.
    pub fn hits(&self) -> Vec<String> {
        self.hits.lock().expect("hits lock").clone()
    }
}

/// The list payload YTS returns for a page of two movies.
pub fn two_movie_list() -> serde_json::Value {
    serde_json::json!({
        "status": "ok",
        "status_message": "Query was successful",
        "data": {
            "movie_count": 2,
            "limit": 20,
            "page_number": 1,
            "movies": [
                {
                    "id": 1,
                    "url": "https://yts.mx/movies/the-first-1999",
                    "title": "The First",
                    "year": 1999,
                    "rating": 7.4,
                    "runtime": 101,
                    "medium_cover_image": "https://yts.mx/assets/images/movies/the_first_1999/medium-cover.jpg"
                },
                {
                    "id": 2,
                    "url": "https://yts.mx/movies/the-second-2004",
                    "title": "The Second",
                    "year": 2004,
                    "rating": 6,
                    "runtime": 88,
                    "medium_cover_image": "https://yts.mx/assets/images/movies/the_second_2004/medium-cover.jpg"
                }
            ]
        },
        "@meta": { "api_version": 2 }
    })
}

/// The details payload YTS returns for a single movie.
pub fn movie_details(id: i32) -> serde_json::Value {
    serde_json::json!({
        "status": "ok",
        "status_message": "Query was successful",
        "data": {
            "movie": {
                "id": id,
                "title": format!("Movie {}", id),
                "year": 2010,
                "rating": 8.1,
                "runtime": 148,
                "genres": ["Action", "Sci-Fi"],
                "description_full": "Long form text that is not part of the schema.",
                "summary": "A thief who steals corporate secrets.",
                "language": "en",
                "medium_cover_image": format!("https://yts.mx/assets/images/movies/{}/medium-cover.jpg", id),
                "torrents": [
                    { "url": format!("https://yts.mx/torrent/download/{}-720", id), "hash": "AAAA", "quality": "720p", "size": "1.1 GB" },
                    { "url": format!("https://yts.mx/torrent/download/{}-1080", id), "hash": "BBBB", "quality": "1080p", "size": "2.2 GB" }
                ]
            }
        }
    })
}

fn record(state: &FakeState, path: &str, query: Option<String>) {
    let hit = match query {
        Some(q) => format!("{}?{}", path, q),
        None => path.to_string(),
    };
    state.hits.lock().expect("hits lock").push(hit);
}

fn reply(canned: &Canned) -> Response {
    (
        canned.status,
        [(header::CONTENT_TYPE, canned.content_type)],
        canned.body.clone(),
    )
        .into_response()
}

async fn serve_list_movies(State(state): State<FakeState>, RawQuery(query): RawQuery) -> Response {
    record(&state, "/list_movies.json", query);
    reply(&state.list)
}

async fn serve_movie_details(
    State(state): State<FakeState>,
    RawQuery(query): RawQuery,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    record(&state, "/movie_details.json", query);
    match &state.details {
        DetailsReply::Fixed(canned) => reply(canned),
        DetailsReply::EchoId => {
            let id: i32 = params
                .get("movie_id")
                .and_then(|v| v.parse().ok())
                .unwrap_or_default();
            let delay = 10u64.saturating_sub(id.clamp(0, 10) as u64) * 5;
            tokio::time::sleep(Duration::from_millis(delay)).await;
            reply(&Canned::json(movie_details(id)))
        }
    }
}
