//! HTML front end: search form and results page.

mod handlers;
mod views;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::opentripmap::{PlacesClient, SearchOptions};

/// Read-only state shared by all requests
pub struct AppState {
    pub places: PlacesClient,
    pub search: SearchOptions,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/landmarks", post(handlers::explore_landmarks))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Serve until the future `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> anyhow::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let app = build_router(state);
    info!("Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}
