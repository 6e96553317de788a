//! # scansek
//!
//! Axum host for the ScanSek dashboard: server-renders the Leptos app,
//! serves the hydration bundle under `/pkg`, and answers `/healthz`.

#![recursion_limit = "256"]

mod config;
mod error;
mod routes;

use std::process::ExitCode;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::ServerConfig;
use crate::error::ServerError;

const DEFAULT_LOG_FILTER: &str = "scansek=info,tower_http=info";

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn run() -> Result<(), ServerError> {
    let config = ServerConfig::from_env()?;
    let conf = leptos::config::get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    let app = routes::app(conf.leptos_options);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    tracing::info!(%addr, "scansek listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine; real environment variables still apply.
    let _ = dotenvy::dotenv();
    init_tracing();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "scansek stopped");
            ExitCode::FAILURE
        }
    }
}
