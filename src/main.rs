use std::sync::Arc;

use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

use moviemax_api::{
    api::{create_router, AppState},
    config::Config,
    services::{providers::omdb::OmdbProvider, CatalogService},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let provider = Arc::new(OmdbProvider::new(
        reqwest::Client::new(),
        config.omdb_api_key.clone(),
        config.omdb_api_url.clone(),
    ));
    let catalog = Arc::new(CatalogService::new(provider));
    let state = AppState::new(catalog);

    let app = create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
