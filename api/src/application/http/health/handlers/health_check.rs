use axum::extract::State;
use serde::{Deserialize, Serialize};
use sustainabite_core::domain::health::ports::HealthCheckService;
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct HealthCheckResponse {
    #[schema(example = "ok")]
    pub status: String,
    #[schema(example = "gemini-2.5-flash")]
    pub model: String,
    pub gemini_available: bool,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    summary = "Health check",
    description = "Reports readiness and the configured LLM model, or `not_configured`.",
    responses(
        (status = 200, body = HealthCheckResponse)
    ),
)]
pub async fn health_check(
    State(state): State<AppState>,
) -> Result<Response<HealthCheckResponse>, ApiError> {
    let status = state.service.status();

    Ok(Response::OK(HealthCheckResponse {
        status: "ok".to_string(),
        model: status.model,
        gemini_available: status.llm_available,
    }))
}
