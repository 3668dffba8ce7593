use std::sync::Arc;

use crate::domain::{ingredient::ports::IngredientDetector, recipe::ports::LLMClient};

/// Process-wide service shared by every request.
///
/// The detector and the LLM client are created once at startup and only
/// read afterwards. `llm_client` is `None` when no credential was provided,
/// which disables recipe generation without affecting detection.
pub struct Service<D, LLM>
where
    D: IngredientDetector,
    LLM: LLMClient,
{
    pub(crate) detector: Arc<D>,
    pub(crate) llm_client: Option<Arc<LLM>>,
    pub(crate) llm_model: String,
    pub(crate) confidence_floor: f32,
}

impl<D, LLM> Service<D, LLM>
where
    D: IngredientDetector,
    LLM: LLMClient,
{
    pub fn new(
        detector: D,
        llm_client: Option<LLM>,
        llm_model: String,
        confidence_floor: f32,
    ) -> Self {
        Self {
            detector: Arc::new(detector),
            llm_client: llm_client.map(Arc::new),
            llm_model,
            confidence_floor,
        }
    }
}

impl<D, LLM> Clone for Service<D, LLM>
where
    D: IngredientDetector,
    LLM: LLMClient,
{
    fn clone(&self) -> Self {
        Self {
            detector: Arc::clone(&self.detector),
            llm_client: self.llm_client.clone(),
            llm_model: self.llm_model.clone(),
            confidence_floor: self.confidence_floor,
        }
    }
}
