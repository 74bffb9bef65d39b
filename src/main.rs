use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod batch;
mod config;
mod error;
mod handlers;
mod models;
mod routes;
mod snmp;
mod walker;

use handlers::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let config = config::ServiceConfig::load()?;
    info!(
        listen = %config.listen,
        timeout = config.timeout_secs,
        retries = config.retries,
        strict = config.strict,
        "запуск сервиса"
    );

    let listen = config.listen.clone();
    let state = AppState {
        config: Arc::new(config),
    };
    let app = routes::create_router(state);

    let listener = tokio::net::TcpListener::bind(&listen).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
