use std::sync::Arc;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use wellness::{AppState, Server, ServerConfig};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "wellness=info,content=info".into());
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(error) => {
            tracing::error!(%error, "invalid configuration");
            std::process::exit(2);
        }
    };
    let state = Arc::new(AppState::from_config(&config));

    let server = match Server::new(&config, state).await {
        Ok(server) => server,
        Err(error) => {
            tracing::error!(%error, "failed to start server");
            std::process::exit(1);
        }
    };
    tracing::info!(addr = %server.addr(), seed_fixtures = config.seed_fixtures, "server running");

    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to listen for shutdown signal");
    }
    tracing::info!("shutting down");
    if let Err(error) = server.stop().await {
        tracing::warn!(%error, "server did not stop cleanly");
    }
}
