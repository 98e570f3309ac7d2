use thiserror::Error;

#[derive(Debug, Error)]
pub enum YtsError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status_code} - {message}")]
    Api { status_code: u16, message: String },

    /// The upstream answered with something other than JSON, usually an
    /// HTML error page served with a 200.
    #[error("Received non-JSON response (content-type: {})", .content_type.as_deref().unwrap_or("<none>"))]
    UnexpectedContentType { content_type: Option<String> },

    #[error("Failed to parse JSON response at {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Upstream reported an error: {0}")]
    Upstream(String),
}

impl YtsError {
    /// Whether the request was abandoned because the client timeout elapsed.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Request(e) if e.is_timeout())
    }
}
