//! Catalog listing and detail endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use dscope_common::{Base, DistroRecord};

use crate::AppState;

/// GET /api/catalog
///
/// The full catalog in its load order.
pub async fn list_catalog(State(state): State<AppState>) -> Json<Vec<DistroRecord>> {
    Json(state.catalog.records().to_vec())
}

/// GET /api/catalog/tags
///
/// Distinct tags across the catalog, sorted ascending. Backs the explorer
/// tag dropdown.
pub async fn list_tags(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.catalog.distinct_tags())
}

/// GET /api/catalog/bases
///
/// Distinct bases across the catalog, sorted ascending by display name.
pub async fn list_bases(State(state): State<AppState>) -> Json<Vec<Base>> {
    Json(state.catalog.distinct_bases())
}

/// GET /api/catalog/:id
///
/// One distribution with its full detail (long description, recommended
/// requirements, links).
pub async fn get_distro(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DistroRecord>, CatalogError> {
    state
        .catalog
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or(CatalogError::UnknownId(id))
}

/// Catalog endpoint errors
#[derive(Debug)]
pub enum CatalogError {
    UnknownId(String),
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            CatalogError::UnknownId(id) => (
                StatusCode::NOT_FOUND,
                format!("Unknown distribution: {}", id),
            ),
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
