mod catalog;
mod config;
mod error;
mod pricing;
mod routes;
mod state;

use std::sync::Arc;

use anyhow::Context;
use axum::serve;
use courier_routing::json::load_reference_data_or_builtin;
use tracing::{Level, info};

use crate::config::ApiConfig;
use crate::state::AppState;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let config = ApiConfig::from_env();
    let reference_data = load_reference_data_or_builtin(config.reference_data.as_deref())?;

    let state = Arc::new(AppState { reference_data });
    let app = routes::app(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_address)
        .await
        .with_context(|| format!("Could not bind {}", config.bind_address))?;

    info!("Server is listening at http://{}", listener.local_addr()?);

    serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests;
