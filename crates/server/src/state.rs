use std::sync::{Arc, OnceLock};

use reqwest::Client;
use yts::YtsClient;

use crate::config::Config;
use crate::graphql::{build_schema, MovieSchema};

const USER_AGENT: &str = concat!("reel/", env!("CARGO_PKG_VERSION"));

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub yts: Arc<YtsClient>,
    /// Built on the first GraphQL request, then shared for the life of the
    /// process.
    schema: Arc<OnceLock<MovieSchema>>,
}

impl AppState {
    /// Build the state with an HTTP client that enforces the configured
    /// upstream timeouts.
    pub fn new(config: Config) -> Result<Self, reqwest::Error> {
        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.upstream_timeout)
            .connect_timeout(config.upstream_connect_timeout)
            .build()?;
        Ok(Self::with_client(config, http_client))
    }

    pub fn with_client(config: Config, http_client: Client) -> Self {
        let yts = YtsClient::new(http_client, config.yts_base_url.clone());
        Self {
            config: Arc::new(config),
            yts: Arc::new(yts),
            schema: Arc::new(OnceLock::new()),
        }
    }

    pub fn schema(&self) -> &MovieSchema {
        self.schema.get_or_init(|| {
            tracing::info!("Initializing GraphQL schema");
            build_schema(Arc::clone(&self.yts))
        })
    }

    pub fn schema_initialized(&self) -> bool {
        self.schema.get().is_some()
    }
}
