pub mod api;
pub mod banner;
pub mod config;
pub mod error;
pub mod graphql;
pub mod state;

use std::net::SocketAddr;

pub use api::create_router;
pub use banner::print_banner;
pub use config::{Config, ConfigError, Environment};
pub use error::{AppError, AppResult};
pub use state::AppState;

pub async fn run_server(addr: SocketAddr, config: Config) -> Result<(), Box<dyn std::error::Error>> {
    config.validate()?;

    tracing::info!(
        env = ?config.env,
        timeout = ?config.upstream_timeout,
        "Proxying YTS API at {}",
        config.yts_base_url
    );

    let state = AppState::new(config)?;
    let app = create_router(state);

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl-C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
