use axum::{Router, routing::post};
use utoipa::OpenApi;

use super::handlers::detect_ingredients::{__path_detect_ingredients, detect_ingredients};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(detect_ingredients))]
pub struct IngredientApiDoc;

pub fn ingredient_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/api/detect", state.args.server.root_path),
        post(detect_ingredients),
    )
}
