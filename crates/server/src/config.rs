use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Dev,
    Prod,
}

impl Environment {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "prod" | "production" => Self::Prod,
            _ => Self::Dev,
        }
    }

    pub fn is_dev(&self) -> bool {
        matches!(self, Self::Dev)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid YTS base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("{0} must be greater than zero")]
    ZeroTimeout(&'static str),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub env: Environment,
    /// Base of the YTS REST API, e.g. `https://yts.mx/api/v2`.
    pub yts_base_url: String,
    /// Upper bound on a whole upstream call.
    pub upstream_timeout: Duration,
    pub upstream_connect_timeout: Duration,
}

impl Config {
    pub fn new(env: Environment, yts_base_url: impl Into<String>) -> Self {
        Self {
            env,
            yts_base_url: yts_base_url.into(),
            upstream_timeout: Duration::from_secs(10),
            upstream_connect_timeout: Duration::from_secs(5),
        }
    }

    pub fn with_timeouts(mut self, timeout: Duration, connect_timeout: Duration) -> Self {
        self.upstream_timeout = timeout;
        self.upstream_connect_timeout = connect_timeout;
        self
    }

    /// Checked once at startup so a bad value fails the process instead of
    /// every resolver call.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidBaseUrl {
            url: self.yts_base_url.clone(),
            reason,
        };
        let url = Url::parse(&self.yts_base_url).map_err(|e| invalid(e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
        }
        if url.query().is_some() {
            return Err(invalid("must not contain a query string".to_string()));
        }

        if self.upstream_timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout("upstream timeout"));
        }
        if self.upstream_connect_timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout("upstream connect timeout"));
        }
        Ok(())
    }
}
