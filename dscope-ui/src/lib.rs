//! dscope-ui library - catalog browser HTTP service

use std::sync::Arc;

use axum::Router;
use tokio::sync::RwLock;
use tower_http::trace::TraceLayer;

use dscope_common::{Catalog, SelectionState};

pub mod api;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Immutable catalog snapshot, loaded once at startup
    pub catalog: Arc<Catalog>,
    /// Comparison selection. The state machine itself is single-threaded;
    /// the lock serializes concurrent HTTP callers around it.
    pub selection: Arc<RwLock<SelectionState>>,
}

impl AppState {
    /// Create application state with an empty comparison selection
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
            selection: Arc::new(RwLock::new(SelectionState::new())),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{delete, get, post};

    Router::new()
        .route("/api/catalog", get(api::list_catalog))
        .route("/api/catalog/tags", get(api::list_tags))
        .route("/api/catalog/bases", get(api::list_bases))
        .route("/api/catalog/:id", get(api::get_distro))
        .route("/api/explorer", get(api::explore))
        .route("/api/wizard", get(api::run_wizard))
        .route(
            "/api/compare",
            get(api::get_comparison).delete(api::clear_comparison),
        )
        .route("/api/compare/:id/toggle", post(api::toggle_comparison))
        .route("/api/compare/:id", delete(api::remove_from_comparison))
        .route("/", get(api::serve_index))
        .route("/static/app.js", get(api::serve_app_js))
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
