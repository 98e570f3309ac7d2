use clap::Parser;
use server::{print_banner, Config, Environment};
use std::net::SocketAddr;
use std::time::Duration;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser, Debug)]
#[command(name = "reel")]
#[command(version, about = "GraphQL proxy for the YTS movie API", long_about = None)]
struct Cli {
    /// Host to bind to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    port: u16,

    /// Base URL of the YTS REST API
    #[arg(long, env = "YTS_API_BASE_URL", default_value = yts::DEFAULT_BASE_URL)]
    yts_base_url: String,

    /// Seconds before an upstream call is abandoned
    #[arg(long, env = "UPSTREAM_TIMEOUT_SECS", default_value_t = 10)]
    upstream_timeout_secs: u64,

    /// Seconds allowed for connecting to the upstream
    #[arg(long, env = "UPSTREAM_CONNECT_TIMEOUT_SECS", default_value_t = 5)]
    upstream_connect_timeout_secs: u64,

    /// Runtime environment (dev or prod)
    #[arg(long = "env", env = "APP_ENV", default_value = "dev")]
    app_env: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    print_banner(env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();

    let app_env = Environment::from_str(&cli.app_env);
    let config = Config::new(app_env, cli.yts_base_url).with_timeouts(
        Duration::from_secs(cli.upstream_timeout_secs),
        Duration::from_secs(cli.upstream_connect_timeout_secs),
    );

    let addr: SocketAddr = format!("{}:{}", cli.host, cli.port).parse()?;

    server::run_server(addr, config).await
}
