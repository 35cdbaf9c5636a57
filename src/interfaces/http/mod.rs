//! HTTP trigger for the calculator.
pub mod handlers;
pub mod params;

use crate::application::service::MortgageService;
use crate::error::Result;
use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub const MORTGAGE_ROUTE: &str = "/api/mortgage";

pub fn router(service: MortgageService) -> Router {
    Router::new()
        .route(MORTGAGE_ROUTE, get(handlers::mortgage))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(service))
}

/// Binds `addr` and serves the router until the process receives Ctrl-C.
pub async fn serve(addr: &str, service: MortgageService) -> Result<()> {
    let app = router(service);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Mortgage calculator listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
