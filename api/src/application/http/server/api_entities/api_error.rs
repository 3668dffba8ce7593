use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use sustainabite_core::domain::common::entities::app_errors::CoreError;
use thiserror::Error;
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

pub const LLM_NOT_CONFIGURED: &str =
    "Gemini API not configured. Please set GEMINI_API_KEY environment variable.";

pub const INVALID_LLM_JSON: &str = "Gemini API returned invalid JSON. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    ServiceUnavailable(String),

    #[error("{0}")]
    InternalServerError(String),
}

/// JSON body of every error response.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ApiErrorResponse {
    #[schema(example = "E_BAD_REQUEST")]
    pub code: String,
    #[schema(example = 400)]
    pub status: u16,
    #[schema(example = "No images provided")]
    pub detail: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "E_BAD_REQUEST",
            ApiError::ServiceUnavailable(_) => "E_SERVICE_UNAVAILABLE",
            ApiError::InternalServerError(_) => "E_INTERNAL_SERVER_ERROR",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ApiErrorResponse {
            code: self.code().to_string(),
            status: status.as_u16(),
            detail: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::InvalidInput(message) => ApiError::BadRequest(message),
            CoreError::LLMUnavailable => ApiError::ServiceUnavailable(LLM_NOT_CONFIGURED.to_string()),
            CoreError::ImageDecode(_) | CoreError::DetectorError(_) => {
                ApiError::InternalServerError(format!("Error: {}", error))
            }
            // The raw completion is logged by the service, never echoed.
            CoreError::InvalidLLMResponse(_) => {
                ApiError::InternalServerError(INVALID_LLM_JSON.to_string())
            }
            CoreError::ExternalServiceError(message) => {
                ApiError::InternalServerError(format!("Error generating recipes: {}", message))
            }
            CoreError::NoValidRecipes => ApiError::InternalServerError(
                "Error generating recipes: no recipe matched the available ingredients and utensils"
                    .to_string(),
            ),
            CoreError::InternalServerError => {
                ApiError::InternalServerError("Internal server error".to_string())
            }
        }
    }
}

/// First validation message, in field-name order so the answer is stable.
fn first_validation_message(errors: &ValidationErrors) -> String {
    let field_errors = errors.field_errors();
    let mut fields: Vec<_> = field_errors.iter().collect();
    fields.sort_by(|(a, _), (b, _)| a.cmp(b));

    fields
        .into_iter()
        .find_map(|(field, errors)| {
            errors.first().map(|error| {
                error
                    .message
                    .as_ref()
                    .map(|message| message.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .unwrap_or_else(|| "Invalid request body".to_string())
}

/// `Json<T>` that also runs `validator` rules before the handler sees `T`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        value
            .validate()
            .map_err(|errors| ApiError::BadRequest(first_validation_message(&errors)))?;

        Ok(ValidateJson(value))
    }
}

#[cfg(test)]
mod tests {
    use validator::Validate;

    use super::*;

    #[derive(Debug, Validate)]
    struct Payload {
        #[validate(length(min = 1, message = "b is required"))]
        b: String,
        #[validate(length(min = 1, message = "a is required"))]
        a: String,
    }

    #[test]
    fn test_core_errors_map_to_statuses() {
        assert_eq!(
            ApiError::from(CoreError::InvalidInput("No images provided".to_string())),
            ApiError::BadRequest("No images provided".to_string())
        );
        assert_eq!(
            ApiError::from(CoreError::LLMUnavailable).status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            ApiError::from(CoreError::NoValidRecipes).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_invalid_llm_output_is_not_echoed() {
        let error = ApiError::from(CoreError::InvalidLLMResponse("secret raw text".to_string()));

        assert_eq!(error, ApiError::InternalServerError(INVALID_LLM_JSON.to_string()));
    }

    #[test]
    fn test_detection_failures_are_prefixed() {
        let error = ApiError::from(CoreError::DetectorError("model offline".to_string()));

        assert_eq!(
            error.to_string(),
            "Error: Detector error: model offline".to_string()
        );
    }

    #[test]
    fn test_first_validation_message_is_sorted_by_field() {
        let errors = Payload {
            b: String::new(),
            a: String::new(),
        }
        .validate()
        .unwrap_err();

        assert_eq!(first_validation_message(&errors), "a is required");
    }
}
