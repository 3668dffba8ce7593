use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct SubmitPantryValidator {
    #[validate(length(min = 1, message = "No ingredients"))]
    #[schema(example = json!(["rice", "eggs", "spinach"]))]
    pub ingredients: Vec<String>,

    #[schema(example = 10.0)]
    pub budget: f64,

    #[schema(example = json!(["pan", "pot"]))]
    pub utensils: Vec<String>,
}
