use async_graphql::http::{parse_query_string, GraphiQLSource};
use axum::{
    extract::{rejection::JsonRejection, RawQuery, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};

use crate::api::{cors, GRAPHQL_PATH};
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Execute a GraphQL request sent as a JSON body.
pub async fn graphql_post(
    State(state): State<AppState>,
    payload: Result<Json<async_graphql::Request>, JsonRejection>,
) -> AppResult<Response> {
    let Json(request) = payload.map_err(|e| AppError::bad_request(e.body_text()))?;
    let response = state.schema().execute(request).await;
    Ok((cors::response_headers(), Json(response)).into_response())
}

/// Execute a GraphQL request carried in the query string
/// (`?query=...&variables=...`). Without a query, dev builds serve GraphiQL.
pub async fn graphql_get(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> AppResult<Response> {
    let query = query.unwrap_or_default();
    if query.is_empty() {
        if state.config.env.is_dev() {
            let page = GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish();
            return Ok((cors::response_headers(), Html(page)).into_response());
        }
        return Err(AppError::bad_request("Missing GraphQL query"));
    }

    let request = parse_query_string(&query)?;
    let response = state.schema().execute(request).await;
    Ok((cors::response_headers(), Json(response)).into_response())
}

/// CORS preflight: 204 with an empty body.
pub async fn graphql_preflight() -> impl IntoResponse {
    (StatusCode::NO_CONTENT, cors::preflight_headers())
}
