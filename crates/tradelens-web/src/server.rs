//! Router construction and serving.

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use tradelens_warehouse::Warehouse;

use crate::handlers;

/// Shared state for all routes.
#[derive(Clone)]
pub struct AppState {
    pub warehouse: Arc<Warehouse>,
}

impl AppState {
    pub fn new(warehouse: Warehouse) -> Self {
        Self {
            warehouse: Arc::new(warehouse),
        }
    }
}

/// Build the application router.
///
/// When `static_dir` is given, unmatched paths fall back to file serving
/// with directory index support, so a bundled report UI can sit next to the
/// API.
pub fn build_router(state: AppState, static_dir: Option<&Path>) -> Router {
    let mut router = Router::new()
        .route("/symbols/summary", get(handlers::symbol_summaries))
        .route("/positions/net", get(handlers::net_positions))
        .route("/days/top", get(handlers::top_day))
        .route("/days/by-symbol", get(handlers::daily_by_symbol))
        .with_state(state);

    if let Some(dir) = static_dir {
        router = router.fallback_service(
            ServeDir::new(dir).append_index_html_on_directories(true),
        );
    }

    router
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Bind and serve until the process is stopped.
pub async fn serve(addr: SocketAddr, router: Router) -> Result<(), std::io::Error> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("trade analytics API listening on http://{addr}");
    axum::serve(listener, router).await
}
