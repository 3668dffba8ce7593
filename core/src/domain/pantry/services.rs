use tracing::info;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    ingredient::ports::IngredientDetector,
    pantry::{entities::Pantry, ports::PantryService},
    recipe::ports::LLMClient,
};

impl<D, LLM> PantryService for Service<D, LLM>
where
    D: IngredientDetector,
    LLM: LLMClient,
{
    async fn submit_pantry(&self, pantry: Pantry) -> Result<Pantry, CoreError> {
        if pantry.ingredients.is_empty() {
            return Err(CoreError::InvalidInput("No ingredients".to_string()));
        }

        info!(
            ingredients = pantry.ingredients.len(),
            utensils = pantry.utensils.len(),
            budget = pantry.budget,
            "Pantry received"
        );

        Ok(pantry)
    }
}
