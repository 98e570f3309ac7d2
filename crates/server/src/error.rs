use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::api::cors;

/// Errors surfaced by the HTTP layer itself.
///
/// Upstream failures never end up here: resolvers swallow them and answer
/// with an empty list or null.
#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed request body or an unparsable GET query string.
    #[error("{0}")]
    BadRequest(String),
}

/// API error response body
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message, details) = match self {
            AppError::BadRequest(msg) => {
                tracing::debug!("Rejected request: {}", msg);
                (StatusCode::BAD_REQUEST, "Bad request".to_string(), Some(msg))
            }
        };

        let body = ErrorResponse {
            error: error_message,
            details,
        };

        (status, cors::response_headers(), Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }
}

impl From<async_graphql::ParseRequestError> for AppError {
    fn from(e: async_graphql::ParseRequestError) -> Self {
        AppError::BadRequest(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header;

    #[test]
    fn test_bad_request_carries_cors_headers() {
        let response = AppError::bad_request("missing query").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_CREDENTIALS],
            "true"
        );
    }

    #[tokio::test]
    async fn test_bad_request_body_carries_details() {
        let response = AppError::bad_request("missing query").into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "error": "Bad request", "details": "missing query" })
        );
    }
}
