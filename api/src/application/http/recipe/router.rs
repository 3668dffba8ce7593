use axum::{Router, middleware, routing::post};
use utoipa::OpenApi;

use super::handlers::generate_recipes::{__path_generate_recipes, generate_recipes};
use crate::application::{http::server::app_state::AppState, llm_middleware::require_llm};

#[derive(OpenApi)]
#[openapi(paths(generate_recipes))]
pub struct RecipeApiDoc;

pub fn recipe_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/api/recipes", state.args.server.root_path),
            post(generate_recipes),
        )
        .route(
            &format!("{}/get-recipes", state.args.server.root_path),
            post(generate_recipes),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), require_llm))
}
