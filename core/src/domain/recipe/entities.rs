use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const DEFAULT_BUDGET: f64 = 5.0;

/// Title used when the model answers with a bare recipe list.
pub const DEFAULT_BUNDLE_TITLE: &str = "Here are your recommended recipes!";

fn default_budget() -> f64 {
    DEFAULT_BUDGET
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecipeRequest {
    #[schema(example = json!(["lentils", "onion", "hot sauce"]))]
    pub available_ingredients: Vec<String>,
    #[schema(example = json!(["pot", "bowl"]))]
    pub available_utensils: Vec<String>,
    #[schema(example = "spicy")]
    pub preference: String,
    #[serde(default = "default_budget")]
    #[schema(example = 5.0)]
    pub budget: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Recipe {
    pub name: String,
    pub ingredients: Vec<String>,
    pub cooking_time: String,
    pub utensils_used: Vec<String>,
    pub steps: Vec<String>,
    /// Estimated footprint, 0.0 (low) to 1.0 (high).
    pub carbon_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecipeBundle {
    #[serde(rename = "Title")]
    pub title: String,
    pub recipes: Vec<Recipe>,
}

/// Shapes the model has been observed to answer with.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RecipeCompletion {
    Bundle(RecipeBundle),
    List(Vec<Recipe>),
}

impl From<RecipeCompletion> for RecipeBundle {
    fn from(completion: RecipeCompletion) -> Self {
        match completion {
            RecipeCompletion::Bundle(bundle) => bundle,
            RecipeCompletion::List(recipes) => RecipeBundle {
                title: DEFAULT_BUNDLE_TITLE.to_string(),
                recipes,
            },
        }
    }
}
