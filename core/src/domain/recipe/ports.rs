use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::entities::{RecipeBundle, RecipeRequest},
};

/// LLM Client trait for calling AI models
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    /// Sends fixed instructions and caller data as separate parts and returns
    /// the model's raw text, expected to be JSON matching `response_schema`.
    fn generate_with_text(
        &self,
        instructions: String,
        content: String,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for recipe generation
#[cfg_attr(test, mockall::automock)]
pub trait RecipeService: Send + Sync {
    /// Whether an LLM credential was configured at startup.
    fn is_llm_configured(&self) -> bool;

    fn generate_recipes(
        &self,
        request: RecipeRequest,
    ) -> impl Future<Output = Result<RecipeBundle, CoreError>> + Send;
}
