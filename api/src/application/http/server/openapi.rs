use utoipa::OpenApi;

use crate::application::http::{
    chat::router::ChatApiDoc,
    health::handlers::{health_check::__path_health_check, home::__path_home},
    ingredient::router::IngredientApiDoc,
    pantry::router::PantryApiDoc,
    recipe::router::RecipeApiDoc,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Sustainabite API",
        description = "Ingredient detection from photos and sustainability-ranked recipe suggestions"
    ),
    paths(home, health_check),
    nest(
        (path = "/api", api = IngredientApiDoc),
        (path = "/api", api = PantryApiDoc),
        (path = "/api", api = ChatApiDoc),
        (path = "/api", api = RecipeApiDoc),
    )
)]
pub struct ApiDoc;
