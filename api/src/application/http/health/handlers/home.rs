use axum::extract::State;
use serde::{Deserialize, Serialize};
use sustainabite_core::domain::health::ports::HealthCheckService;
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

const APP_NAME: &str = "Sustainabite";

const ENDPOINTS: [&str; 6] = [
    "/api/detect",
    "/api/pantry",
    "/api/recipes",
    "/api/chat",
    "/health",
    "/swagger-ui",
];

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct HomeResponse {
    #[schema(example = "Sustainabite")]
    pub app: String,
    #[schema(example = "online")]
    pub status: String,
    pub endpoints: Vec<String>,
    pub gemini_available: bool,
}

#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    summary = "Service banner",
    description = "Lists the public endpoints and whether recipe generation is available.",
    responses(
        (status = 200, body = HomeResponse)
    ),
)]
pub async fn home(State(state): State<AppState>) -> Result<Response<HomeResponse>, ApiError> {
    let root_path = &state.args.server.root_path;

    Ok(Response::OK(HomeResponse {
        app: APP_NAME.to_string(),
        status: "online".to_string(),
        endpoints: ENDPOINTS
            .iter()
            .map(|endpoint| format!("{}{}", root_path, endpoint))
            .collect(),
        gemini_available: state.service.status().llm_available,
    }))
}
