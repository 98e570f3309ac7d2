//! Fixed CORS headers for the GraphQL endpoint. Every origin is allowed.

use axum::http::header::{
    HeaderName, ACCESS_CONTROL_ALLOW_CREDENTIALS, ACCESS_CONTROL_ALLOW_HEADERS,
    ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
};

pub const ALLOWED_METHODS: &str = "POST, GET, OPTIONS";
pub const ALLOWED_HEADERS: &str = "Content-Type";

/// Attached to every GET/POST response, errors included.
pub fn response_headers() -> [(HeaderName, &'static str); 2] {
    [
        (ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
        (ACCESS_CONTROL_ALLOW_CREDENTIALS, "true"),
    ]
}

/// Answer to an OPTIONS preflight.
pub fn preflight_headers() -> [(HeaderName, &'static str); 3] {
    [
        (ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
        (ACCESS_CONTROL_ALLOW_METHODS, ALLOWED_METHODS),
        (ACCESS_CONTROL_ALLOW_HEADERS, ALLOWED_HEADERS),
    ]
}
