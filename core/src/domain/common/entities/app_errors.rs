use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("Failed to decode image: {0}")]
    ImageDecode(String),

    #[error("Detector error: {0}")]
    DetectorError(String),

    #[error("LLM client is not configured")]
    LLMUnavailable,

    #[error("LLM returned invalid JSON: {0}")]
    InvalidLLMResponse(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("LLM returned no recipe satisfying the request constraints")]
    NoValidRecipes,

    #[error("Internal server error")]
    InternalServerError,
}
