use axum::{Router, routing::get};

use super::handlers::{health_check::health_check, home::home};
use crate::application::http::server::app_state::AppState;

pub fn health_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;
    // An empty root path still needs "/" for the banner.
    let home_path = if root_path.is_empty() {
        "/".to_string()
    } else {
        root_path.clone()
    };

    Router::new()
        .route(&home_path, get(home))
        .route(&format!("{}/health", root_path), get(health_check))
}
