use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{Router, http::Method};
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

use super::{api, pages};
use crate::catalog::Catalog;
use crate::config::Config;
use crate::utils::format_path_with_tilde;

/// Build the full application router over a shared catalog
pub fn router(catalog: Arc<Catalog>) -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods([Method::GET]);

    Router::new()
        .nest("/api", api::routes())
        .merge(pages::routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(catalog)
}

/// Bind to the configured address and serve until the process is stopped
pub async fn serve(config: Config) -> Result<()> {
    let catalog = Arc::new(config.catalog());
    info!("Projects directory: {}", format_path_with_tilde(catalog.projects_dir()));
    info!("Archive file: {}", format_path_with_tilde(catalog.archive().path()));

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Session viewer listening on http://{addr}");

    axum::serve(listener, router(catalog)).await.context("Server error")?;
    Ok(())
}
