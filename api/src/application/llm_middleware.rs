use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use sustainabite_core::domain::recipe::ports::RecipeService;
use tracing::warn;

use crate::application::http::server::{
    api_entities::api_error::{ApiError, LLM_NOT_CONFIGURED},
    app_state::AppState,
};

/// Rejects recipe requests with 503 before the body is read when no LLM
/// credential was configured at startup.
pub async fn require_llm(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if !state.service.is_llm_configured() {
        warn!(uri = %req.uri(), "Recipe request refused, LLM not configured");
        return Err(ApiError::ServiceUnavailable(LLM_NOT_CONFIGURED.to_string()));
    }

    Ok(next.run(req).await)
}
