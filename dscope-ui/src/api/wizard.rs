//! Wizard endpoint: questionnaire answers in, recommendations out

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use dscope_common::{recommend, DistroRecord, Experience, RecommendationCriteria, UseCase};

use crate::AppState;

/// Query parameters for the wizard. All fields are raw user input; the
/// engine tolerates malformed RAM text, but enum fields must be one of the
/// known values when non-empty.
#[derive(Debug, Deserialize)]
pub struct WizardQuery {
    pub cpu: Option<String>,
    pub ram: Option<String>,
    pub experience: Option<String>,
    pub use_case: Option<String>,
}

/// Wizard response: which decision mode applied, and the matches in
/// catalog order
#[derive(Debug, Serialize)]
pub struct WizardResponse {
    pub mode: &'static str,
    pub total: usize,
    pub distros: Vec<DistroRecord>,
}

/// GET /api/wizard?cpu=&ram=&experience=&use_case=
///
/// Validates the trigger gate (hardware input, or a complete
/// experience/use-case pair) before invoking the recommendation engine;
/// an incomplete questionnaire is a client error.
pub async fn run_wizard(
    State(state): State<AppState>,
    Query(query): Query<WizardQuery>,
) -> Result<Json<WizardResponse>, WizardError> {
    let experience = match query.experience.as_deref().filter(|s| !s.is_empty()) {
        Some(raw) => Some(
            raw.parse::<Experience>()
                .map_err(|_| WizardError::UnknownExperience(raw.to_string()))?,
        ),
        None => None,
    };
    let use_case = match query.use_case.as_deref().filter(|s| !s.is_empty()) {
        Some(raw) => Some(
            raw.parse::<UseCase>()
                .map_err(|_| WizardError::UnknownUseCase(raw.to_string()))?,
        ),
        None => None,
    };

    let criteria = RecommendationCriteria {
        cpu: query.cpu,
        ram_gb: query.ram,
        experience,
        use_case,
    };

    if !criteria.satisfies_gate() {
        return Err(WizardError::IncompleteCriteria);
    }

    let mode = if criteria.hardware_mode() {
        "hardware"
    } else {
        "profile"
    };

    let matches = recommend(state.catalog.records(), &criteria);

    Ok(Json(WizardResponse {
        mode,
        total: matches.len(),
        distros: matches.into_iter().cloned().collect(),
    }))
}

/// Wizard endpoint errors
#[derive(Debug)]
pub enum WizardError {
    /// Neither hardware input nor a complete profile pair was supplied
    IncompleteCriteria,
    UnknownExperience(String),
    UnknownUseCase(String),
}

impl IntoResponse for WizardError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            WizardError::IncompleteCriteria => (
                StatusCode::BAD_REQUEST,
                "Supply CPU or RAM, or both an experience level and a use case".to_string(),
            ),
            WizardError::UnknownExperience(value) => (
                StatusCode::BAD_REQUEST,
                format!("Unknown experience level: {}", value),
            ),
            WizardError::UnknownUseCase(value) => (
                StatusCode::BAD_REQUEST,
                format!("Unknown use case: {}", value),
            ),
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
