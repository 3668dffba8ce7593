use axum::extract::{Query, rejection::QueryRejection};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    chat::validators::ChatParams,
    server::api_entities::{
        api_error::{ApiError, ApiErrorResponse},
        response::Response,
    },
};

pub const CHAT_PLACEHOLDER: &str = "AI integration coming soon!";

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ChatResponse {
    pub success: bool,
    pub user_message: String,
    #[schema(example = "AI integration coming soon!")]
    pub ai_response: String,
}

#[utoipa::path(
    post,
    path = "/chat",
    tag = "chat",
    summary = "Chat",
    description = "Placeholder. Echoes the message with a fixed reply.",
    params(ChatParams),
    responses(
        (status = 200, body = ChatResponse),
        (status = 400, body = ApiErrorResponse)
    ),
)]
pub async fn chat(
    params: Result<Query<ChatParams>, QueryRejection>,
) -> Result<Response<ChatResponse>, ApiError> {
    let Query(params) = params.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    Ok(Response::OK(ChatResponse {
        success: true,
        user_message: params.message,
        ai_response: CHAT_PLACEHOLDER.to_string(),
    }))
}
