use axum::{routing::get, Router};

use crate::handlers;
use crate::shared::content_store::SharedContentStore;

/// State shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub store: SharedContentStore,
}

impl AppState {
    pub fn new(store: SharedContentStore) -> Self {
        Self { store }
    }
}

/// All application routes
pub fn configure_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // Indicators
        .route("/api/indicator", get(handlers::indicators::get_indicator_map))
        .route(
            "/api/indicators/meta",
            get(handlers::indicators::get_indicator_catalog),
        )
        // A001 Locality
        .route("/api/localities", get(handlers::a001_locality::list_all))
        // A002 Page
        .route("/api/pages/:slug", get(handlers::a002_page::get_bundle))
        .with_state(state)
}
