use std::sync::Arc;

use anyhow::Context;
use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tokio::net::TcpListener;
use tracing::info;

use jex_metrics::NodeGauges;

/// Build the scrape router: `GET /metrics` and `GET /health`.
pub fn router(gauges: Arc<NodeGauges>) -> Router {
    Router::new()
        .route("/metrics", get(metrics_handler))
        .route("/health", get(health_handler))
        .with_state(gauges)
}

/// Bind `listen` and serve scrapes until the process terminates.
///
/// A bind failure is fatal and surfaces to `main`.
pub async fn serve(listen: &str, gauges: Arc<NodeGauges>) -> anyhow::Result<()> {
    let listener = TcpListener::bind(listen)
        .await
        .with_context(|| format!("failed to bind scrape endpoint on {}", listen))?;

    info!("scrape endpoint listening on {}", listen);

    axum::serve(listener, router(gauges)).await?;
    Ok(())
}

async fn metrics_handler(State(gauges): State<Arc<NodeGauges>>) -> Response {
    match gauges.render() {
        Ok(body) => (StatusCode::OK, body).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("failed to render metrics: {}", e),
        )
            .into_response(),
    }
}

async fn health_handler() -> Response {
    (StatusCode::OK, "OK").into_response()
}
