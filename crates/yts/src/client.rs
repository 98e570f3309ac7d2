use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::error::YtsError;
use crate::models::Envelope;

pub const DEFAULT_BASE_URL: &str = "https://yts.mx/api/v2";

const JSON_MEDIA_TYPE: &str = "application/json";

/// Client for the YTS REST API.
///
/// Holds no state besides the reqwest client, so it is shared behind an
/// `Arc` and used concurrently without locking.
#[derive(Debug, Clone)]
pub struct YtsClient {
    client: Client,
    base_url: String,
}

impl YtsClient {
    /// Create a YtsClient with a reqwest Client. Timeouts are whatever the
    /// given client was built with.
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn client(&self) -> &Client {
        &self.client
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Reject any non-2xx response, keeping the body for the error message.
    pub(crate) async fn ensure_success(&self, response: Response) -> crate::Result<Response> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(YtsError::Api {
                status_code: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }

    /// Parse a YTS envelope and type its `data` payload.
    ///
    /// The content-type header is checked before the body is read: YTS sits
    /// behind a CDN that serves HTML error pages with a 200.
    pub(crate) async fn handle_response<T: DeserializeOwned>(
        &self,
        response: Response,
    ) -> crate::Result<T> {
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        if !is_json(content_type.as_deref()) {
            return Err(YtsError::UnexpectedContentType { content_type });
        }

        let body = response.text().await?;
        let deserializer = &mut serde_json::Deserializer::from_str(&body);
        let envelope: Envelope =
            serde_path_to_error::deserialize(deserializer).map_err(|e| YtsError::Json {
                path: e.path().to_string(),
                source: e.into_inner(),
            })?;

        if envelope.status.as_deref() == Some("error") {
            return Err(YtsError::Upstream(
                envelope.status_message.unwrap_or_default(),
            ));
        }

        serde_path_to_error::deserialize(envelope.data).map_err(|e| YtsError::Json {
            path: data_path(&e.path().to_string()),
            source: e.into_inner(),
        })
    }
}

fn data_path(inner: &str) -> String {
    if inner == "." {
        "data".to_string()
    } else {
        format!("data.{}", inner)
    }
}

fn is_json(content_type: Option<&str>) -> bool {
    content_type
        .map(|value| value.to_ascii_lowercase().contains(JSON_MEDIA_TYPE))
        .unwrap_or(false)
}
