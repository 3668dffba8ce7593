use crate::domain::{
    common::services::Service,
    health::{
        entities::{MODEL_NOT_CONFIGURED, ServiceStatus},
        ports::HealthCheckService,
    },
    ingredient::ports::IngredientDetector,
    recipe::ports::LLMClient,
};

impl<D, LLM> HealthCheckService for Service<D, LLM>
where
    D: IngredientDetector,
    LLM: LLMClient,
{
    fn status(&self) -> ServiceStatus {
        let llm_available = self.llm_client.is_some();
        let model = if llm_available {
            self.llm_model.clone()
        } else {
            MODEL_NOT_CONFIGURED.to_string()
        };

        ServiceStatus {
            llm_available,
            model,
        }
    }
}
