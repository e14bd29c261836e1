//! Comparison selection endpoints
//!
//! The selection is the only mutable state in the service. Every mutation
//! returns the resulting selection summary so the UI can re-render without
//! a second round trip.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use tracing::info;

use dscope_common::{DistroRecord, ToggleOutcome};

use crate::AppState;

/// Current comparison selection: ids and resolved records in selection
/// order, plus whether the set is at capacity
#[derive(Debug, Serialize)]
pub struct ComparisonResponse {
    pub ids: Vec<String>,
    pub full: bool,
    pub distros: Vec<DistroRecord>,
}

/// Toggle result plus the resulting selection
#[derive(Debug, Serialize)]
pub struct ToggleResponse {
    /// "added", "removed", or "rejected" (set was full)
    pub outcome: &'static str,
    pub ids: Vec<String>,
    pub full: bool,
    pub distros: Vec<DistroRecord>,
}

async fn snapshot(state: &AppState) -> ComparisonResponse {
    let selection = state.selection.read().await;
    let distros = state
        .catalog
        .resolve(selection.selected())
        .into_iter()
        .cloned()
        .collect();
    ComparisonResponse {
        ids: selection.selected().to_vec(),
        full: selection.is_full(),
        distros,
    }
}

/// GET /api/compare
pub async fn get_comparison(State(state): State<AppState>) -> Json<ComparisonResponse> {
    Json(snapshot(&state).await)
}

/// POST /api/compare/:id/toggle
///
/// Toggle a catalog entry in or out of the comparison. At capacity a new
/// id is reported as rejected with the selection unchanged; the UI is
/// expected to have disabled the action already.
pub async fn toggle_comparison(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ToggleResponse>, CompareError> {
    if !state.catalog.contains(&id) {
        return Err(CompareError::UnknownId(id));
    }

    let outcome = {
        let mut selection = state.selection.write().await;
        selection.toggle(&id)
    };
    info!("Comparison toggle {}: {:?}", id, outcome);

    let outcome = match outcome {
        ToggleOutcome::Added => "added",
        ToggleOutcome::Removed => "removed",
        ToggleOutcome::RejectedFull => "rejected",
    };

    let current = snapshot(&state).await;
    Ok(Json(ToggleResponse {
        outcome,
        ids: current.ids,
        full: current.full,
        distros: current.distros,
    }))
}

/// DELETE /api/compare/:id
///
/// Remove an entry from the comparison. Idempotent: removing an id that is
/// not selected (or not even in the catalog) leaves the selection unchanged
/// and still succeeds.
pub async fn remove_from_comparison(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<ComparisonResponse> {
    let removed = {
        let mut selection = state.selection.write().await;
        selection.remove(&id)
    };
    if removed {
        info!("Removed {} from comparison", id);
    }

    Json(snapshot(&state).await)
}

/// DELETE /api/compare
///
/// Explicit remove-all.
pub async fn clear_comparison(State(state): State<AppState>) -> Json<ComparisonResponse> {
    {
        let mut selection = state.selection.write().await;
        selection.clear();
    }
    info!("Comparison selection cleared");

    Json(snapshot(&state).await)
}

/// Comparison endpoint errors
#[derive(Debug)]
pub enum CompareError {
    UnknownId(String),
}

impl IntoResponse for CompareError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            CompareError::UnknownId(id) => (
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
