use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::service::{DecisionService, DecisionServiceError};
use super::views::{CatalogView, DecisionStateView};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResolveRequest {
    #[serde(default)]
    pub answers: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerRequest {
    #[serde(default)]
    pub answers: BTreeMap<String, String>,
    pub factor: String,
    /// `null` clears the factor.
    #[serde(default)]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SummaryRequest {
    #[serde(default)]
    pub answers: BTreeMap<String, String>,
    #[serde(default)]
    pub problem: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryResponse {
    pub summary: String,
}

/// Router builder exposing the decision funnel over HTTP.
pub fn decision_router(service: Arc<DecisionService>) -> Router {
    Router::new()
        .route("/api/v1/decision/catalog", get(catalog_handler))
        .route("/api/v1/decision/resolve", post(resolve_handler))
        .route("/api/v1/decision/answer", post(answer_handler))
        .route("/api/v1/decision/summary", post(summary_handler))
        .with_state(service)
}

pub(crate) async fn catalog_handler() -> Json<CatalogView> {
    Json(CatalogView::standard())
}

pub(crate) async fn resolve_handler(
    State(service): State<Arc<DecisionService>>,
    Json(request): Json<ResolveRequest>,
) -> Result<Json<DecisionStateView>, DecisionServiceError> {
    service.resolve(&request.answers).map(Json)
}

pub(crate) async fn answer_handler(
    State(service): State<Arc<DecisionService>>,
    Json(request): Json<AnswerRequest>,
) -> Result<Json<DecisionStateView>, DecisionServiceError> {
    service
        .answer(&request.answers, &request.factor, request.value.as_deref())
        .map(Json)
}

pub(crate) async fn summary_handler(
    State(service): State<Arc<DecisionService>>,
    Json(request): Json<SummaryRequest>,
) -> Result<Json<SummaryResponse>, DecisionServiceError> {
    service
        .summary(&request.answers, &request.problem)
        .map(|summary| Json(SummaryResponse { summary }))
}

impl IntoResponse for DecisionServiceError {
    fn into_response(self) -> Response {
        let payload = match &self {
            DecisionServiceError::Incomplete { next } => json!({
                "error": self.to_string(),
                "next_question": next,
            }),
            _ => json!({ "error": self.to_string() }),
        };

        let status = match self {
            DecisionServiceError::Input(_) => StatusCode::BAD_REQUEST,
            DecisionServiceError::Incomplete { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            DecisionServiceError::InvalidTree(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(payload)).into_response()
    }
}
