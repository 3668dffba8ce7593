use tracing::{info, warn};

use crate::{
    domain::common::{SustainabiteConfig, entities::app_errors::CoreError, services::Service},
    infrastructure::{detector::HttpIngredientDetector, llm::GeminiLLMClient},
};

pub type SustainabiteService = Service<HttpIngredientDetector, GeminiLLMClient>;

pub fn create_service(config: SustainabiteConfig) -> Result<SustainabiteService, CoreError> {
    let detector = HttpIngredientDetector::new(&config.detector)?;
    let llm_client = GeminiLLMClient::from_config(&config.llm)?;

    match &llm_client {
        Some(client) => info!(model = %client.model_name(), "Gemini client configured"),
        None => warn!("GEMINI_API_KEY is not set, recipe generation is disabled"),
    }

    info!(
        endpoint = %config.detector.endpoint,
        confidence_floor = config.detector.confidence_floor,
        "Ingredient detector configured"
    );

    Ok(Service::new(
        detector,
        llm_client,
        config.llm.gemini_model,
        config.detector.confidence_floor,
    ))
}
