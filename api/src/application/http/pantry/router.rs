use axum::{Router, routing::post};
use utoipa::OpenApi;

use super::handlers::submit_pantry::{__path_submit_pantry, submit_pantry};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(submit_pantry))]
pub struct PantryApiDoc;

pub fn pantry_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/api/pantry", state.args.server.root_path),
        post(submit_pantry),
    )
}
