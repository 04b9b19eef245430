#![recursion_limit = "256"]

mod config;
mod routes;

use tracing_subscriber::EnvFilter;

use crate::config::{ConfigError, HostConfig};

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    // A missing .env file is the normal case outside development.
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = dotenv {
        tracing::debug!(error = %e, "no .env loaded");
    }

    let config = HostConfig::from_env()?;
    let app = routes::app()?;

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, "ima studio listening");
    axum::serve(listener, app).await?;
    Ok(())
}
