use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const MODEL_NOT_CONFIGURED: &str = "not_configured";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ServiceStatus {
    pub llm_available: bool,
    /// Configured model name, or `not_configured`.
    pub model: String,
}
