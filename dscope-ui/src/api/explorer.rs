//! Explorer endpoint: free-text search plus tag and base filters

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use dscope_common::{filter, Base, DistroRecord, FilterCriteria};

use crate::AppState;

/// Query parameters for the explorer. Empty strings mean "no constraint",
/// matching what the dropdowns submit for their placeholder entries.
#[derive(Debug, Deserialize)]
pub struct ExplorerQuery {
    #[serde(default)]
    pub search: String,
    pub tag: Option<String>,
    pub base: Option<String>,
}

/// Explorer response: matches in catalog order
#[derive(Debug, Serialize)]
pub struct ExplorerResponse {
    pub total: usize,
    pub distros: Vec<DistroRecord>,
}

/// GET /api/explorer?search=&tag=&base=
///
/// Stable filter over the catalog; all supplied dimensions must match.
/// An unknown base value is a client error, not an empty result.
pub async fn explore(
    State(state): State<AppState>,
    Query(query): Query<ExplorerQuery>,
) -> Result<Json<ExplorerResponse>, ExplorerError> {
    let base = match query.base.as_deref().filter(|s| !s.is_empty()) {
        Some(raw) => Some(
            raw.parse::<Base>()
                .map_err(|_| ExplorerError::UnknownBase(raw.to_string()))?,
        ),
        None => None,
    };

    let criteria = FilterCriteria {
        search: query.search,
        tag: query.tag.filter(|t| !t.is_empty()),
        base,
    };

    let matches = filter(state.catalog.records(), &criteria);

    Ok(Json(ExplorerResponse {
        total: matches.len(),
        distros: matches.into_iter().cloned().collect(),
    }))
}

/// Explorer endpoint errors
#[derive(Debug)]
pub enum ExplorerError {
    UnknownBase(String),
}

impl IntoResponse for ExplorerError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ExplorerError::UnknownBase(base) => {
                (StatusCode::BAD_REQUEST, format!("Unknown base: {}", base))
            }
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
