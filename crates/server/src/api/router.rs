use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

use super::handlers;

pub const GRAPHQL_PATH: &str = "/api/graphql";

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            GRAPHQL_PATH,
            get(handlers::graphql_get)
                .post(handlers::graphql_post)
                .options(handlers::graphql_preflight),
        )
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use yts::testing::{movie_details, two_movie_list, Canned, FakeYts};

    use super::*;
    use crate::config::{Config, Environment};
    use crate::graphql::documents::{GET_MOVIES, GET_MOVIE_DETAILS};

    fn state_for(fake: &FakeYts, env: Environment) -> AppState {
        AppState::new(Config::new(env, fake.base_url.clone())).unwrap()
    }

    fn post_json(body: Value) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(GRAPHQL_PATH)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn assert_cors(response: &Response) {
        assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_CREDENTIALS],
            "true"
        );
    }

    #[tokio::test]
    async fn test_preflight() {
        let fake = FakeYts::start(
            Canned::json(two_movie_list()),
            Canned::json(movie_details(1)),
        )
        .await;
        let app = create_router(state_for(&fake, Environment::Prod));

        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri(GRAPHQL_PATH)
            .header(header::ORIGIN, "http://localhost:3001")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        let headers = response.headers();
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(
            headers[header::ACCESS_CONTROL_ALLOW_METHODS],
            "POST, GET, OPTIONS"
        );
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_HEADERS], "Content-Type");
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(body.is_empty());
        assert!(fake.hits().is_empty());
    }

    #[tokio::test]
    async fn test_post_movies() {
        let fake = FakeYts::start(
            Canned::json(two_movie_list()),
            Canned::json(movie_details(1)),
        )
        .await;
        let app = create_router(state_for(&fake, Environment::Prod));

        let response = app
            .oneshot(post_json(json!({ "query": GET_MOVIES, "operationName": "GetMovies" })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_cors(&response);
        let body = body_json(response).await;
        assert!(body.get("errors").is_none());
        let titles: Vec<_> = body["data"]["movies"]
            .as_array()
            .unwrap()
            .iter()
            .map(|m| m["title"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(titles, vec!["The First", "The Second"]);
    }

    #[tokio::test]
    async fn test_post_movies_degrades_to_empty_list() {
        let fake = FakeYts::start(
            Canned::html(StatusCode::BAD_GATEWAY),
            Canned::json(movie_details(1)),
        )
        .await;
        let app = create_router(state_for(&fake, Environment::Prod));

        let response = app
            .oneshot(post_json(json!({ "query": GET_MOVIES })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_cors(&response);
        assert_eq!(body_json(response).await, json!({ "data": { "movies": [] } }));
    }

    #[tokio::test]
    async fn test_post_movie_details_with_variables() {
        let fake = FakeYts::start(
            Canned::json(two_movie_list()),
            Canned::json(movie_details(7)),
        )
        .await;
        let app = create_router(state_for(&fake, Environment::Prod));

        let response = app
            .oneshot(post_json(json!({
                "query": GET_MOVIE_DETAILS,
                "operationName": "GetMovieDetails",
                "variables": { "id": 7 }
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["data"]["movie"]["id"], 7);
        assert_eq!(body["data"]["movie"]["torrents"][1]["quality"], "1080p");
        assert_eq!(
            fake.hits(),
            vec!["/movie_details.json?movie_id=7".to_string()]
        );
    }

    #[tokio::test]
    async fn test_post_movie_details_upstream_failure_is_null() {
        let fake = FakeYts::start(
            Canned::json(two_movie_list()),
            Canned::json(movie_details(7)).with_status(StatusCode::INTERNAL_SERVER_ERROR),
        )
        .await;
        let app = create_router(state_for(&fake, Environment::Prod));

        let response = app
            .oneshot(post_json(json!({
                "query": GET_MOVIE_DETAILS,
                "variables": { "id": 7 }
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_cors(&response);
        assert_eq!(body_json(response).await, json!({ "data": { "movie": null } }));
    }

    #[tokio::test]
    async fn test_post_malformed_body_is_bad_request() {
        let fake = FakeYts::start(
            Canned::json(two_movie_list()),
            Canned::json(movie_details(1)),
        )
        .await;
        let app = create_router(state_for(&fake, Environment::Prod));

        let request = Request::builder()
            .method(Method::POST)
            .uri(GRAPHQL_PATH)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{ not json"))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_cors(&response);
        assert!(body_json(response).await["error"].is_string());
        assert!(fake.hits().is_empty());
    }

    #[tokio::test]
    async fn test_get_executes_query_string() {
        let fake = FakeYts::start(
            Canned::json(two_movie_list()),
            Canned::json(movie_details(3)),
        )
        .await;
        let app = create_router(state_for(&fake, Environment::Prod));

        let response = app
            .oneshot(get_request(
                "/api/graphql?query=query(%24id%3A%20Int!)%7Bmovie(id%3A%24id)%7Btitle%7D%7D&variables=%7B%22id%22%3A3%7D",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_cors(&response);
        assert_eq!(
            body_json(response).await,
            json!({ "data": { "movie": { "title": "Movie 3" } } })
        );
    }

    #[tokio::test]
    async fn test_get_without_query_in_prod_is_bad_request() {
        let fake = FakeYts::start(
            Canned::json(two_movie_list()),
            Canned::json(movie_details(1)),
        )
        .await;
        let app = create_router(state_for(&fake, Environment::Prod));

        let response = app.oneshot(get_request(GRAPHQL_PATH)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_cors(&response);
    }

    #[tokio::test]
    async fn test_get_without_query_in_dev_serves_graphiql() {
        let fake = FakeYts::start(
            Canned::json(two_movie_list()),
            Canned::json(movie_details(1)),
        )
        .await;
        let app = create_router(state_for(&fake, Environment::Dev));

        let response = app.oneshot(get_request(GRAPHQL_PATH)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("text/html"));
    }

    #[tokio::test]
    async fn test_schema_is_built_on_first_request() {
        let fake = FakeYts::start(
            Canned::json(two_movie_list()),
            Canned::json(movie_details(1)),
        )
        .await;
        let state = state_for(&fake, Environment::Prod);
        let app = create_router(state.clone());

        let response = app.clone().oneshot(get_request("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(!state.schema_initialized());

        app.oneshot(post_json(json!({ "query": GET_MOVIES })))
            .await
            .unwrap();
        assert!(state.schema_initialized());
    }
}
