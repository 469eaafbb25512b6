use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{router, AppState};
use vaidya_core::config::{data_dir_from_env_value, validate_data_dir};
use vaidya_core::CoreConfig;

/// Main entry point for the Vaidya application
///
/// Resolves configuration once, loads the interaction rule catalogue and serves the REST API.
///
/// # Environment Variables
/// - `VAIDYA_REST_ADDR`: REST server address (default: "0.0.0.0:5000")
/// - `VAIDYA_DATA_DIR`: Data directory holding the registries and records (default: "vaidya_data")
/// - `API_KEY`: API key expected in the `x-api-key` header of `/api/*` requests
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the data directory or one of its reference files is missing,
/// - `API_KEY` is not set,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("vaidya_run=info".parse()?)
                .add_directive("vaidya_core=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr = std::env::var("VAIDYA_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:5000".into());

    let data_dir = data_dir_from_env_value(std::env::var("VAIDYA_DATA_DIR").ok());
    let cfg = Arc::new(CoreConfig::new(data_dir)?);
    validate_data_dir(&cfg)?;

    let api_key = std::env::var("API_KEY").context("API_KEY not set in environment")?;
    let state = AppState::from_config(cfg.clone(), &api_key)?;

    tracing::info!("++ Data directory {}", cfg.data_dir().display());
    tracing::info!("++ Starting Vaidya REST on {}", rest_addr);

    let listener = tokio::net::TcpListener::bind(&rest_addr).await?;
    axum::serve(listener, router(state)).await?;

    Ok(())
}
