use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// What the user has on hand. Echoed back to the caller, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Pantry {
    pub ingredients: Vec<String>,
    pub budget: f64,
    pub utensils: Vec<String>,
}
