use axum::extract::State;
use sustainabite_core::domain::recipe::{entities::RecipeBundle, ports::RecipeService};

use crate::application::http::{
    recipe::validators::GenerateRecipesValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/recipes",
    tag = "recipe",
    summary = "Generate recipes",
    description = "Asks the LLM for up to three ranked recipes that only use the supplied ingredients and utensils. Also served at `/get-recipes`.",
    request_body = GenerateRecipesValidator,
    responses(
        (status = 200, body = RecipeBundle),
        (status = 400, body = ApiErrorResponse),
        (status = 500, body = ApiErrorResponse),
        (status = 503, body = ApiErrorResponse, description = "GEMINI_API_KEY is not set")
    ),
)]
pub async fn generate_recipes(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<GenerateRecipesValidator>,
) -> Result<Response<RecipeBundle>, ApiError> {
    let bundle = state
        .service
        .generate_recipes(payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(bundle))
}
