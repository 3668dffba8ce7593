use serde::{Deserialize, Serialize};
use sustainabite_core::domain::recipe::entities::{DEFAULT_BUDGET, RecipeRequest};
use utoipa::ToSchema;
use validator::Validate;

fn default_budget() -> f64 {
    DEFAULT_BUDGET
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct GenerateRecipesValidator {
    #[validate(length(min = 1, message = "No ingredients provided"))]
    #[schema(example = json!(["lentils", "onion", "hot sauce"]))]
    pub available_ingredients: Vec<String>,

    #[validate(length(min = 1, message = "No utensils provided"))]
    #[schema(example = json!(["pot", "bowl"]))]
    pub available_utensils: Vec<String>,

    #[schema(example = "spicy")]
    pub preference: String,

    #[serde(default = "default_budget")]
    #[schema(example = 5.0)]
    pub budget: f64,
}

impl From<GenerateRecipesValidator> for RecipeRequest {
    fn from(payload: GenerateRecipesValidator) -> Self {
        Self {
            available_ingredients: payload.available_ingredients,
            available_utensils: payload.available_utensils,
            preference: payload.preference,
            budget: payload.budget,
        }
    }
}
