use axum::extract::State;
use serde::{Deserialize, Serialize};
use sustainabite_core::domain::pantry::{entities::Pantry, ports::PantryService};
use utoipa::ToSchema;

use crate::application::http::{
    pantry::validators::SubmitPantryValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SubmitPantryResponse {
    pub success: bool,
    #[schema(example = "Pantry saved")]
    pub message: String,
    pub data: Pantry,
}

#[utoipa::path(
    post,
    path = "/pantry",
    tag = "pantry",
    summary = "Submit pantry",
    description = "Accepts what the user has on hand and echoes it back. Nothing is stored.",
    request_body = SubmitPantryValidator,
    responses(
        (status = 200, body = SubmitPantryResponse),
        (status = 400, body = ApiErrorResponse)
    ),
)]
pub async fn submit_pantry(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SubmitPantryValidator>,
) -> Result<Response<SubmitPantryResponse>, ApiError> {
    let pantry = state
        .service
        .submit_pantry(Pantry {
            ingredients: payload.ingredients,
            budget: payload.budget,
            utensils: payload.utensils,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(SubmitPantryResponse {
        success: true,
        message: "Pantry saved".to_string(),
        data: pantry,
    }))
}
