use axum::extract::{Multipart, State};
use serde::{Deserialize, Serialize};
use sustainabite_core::domain::ingredient::{
    ports::IngredientDetectionService,
    value_objects::{DetectIngredientsInput, UploadedImage},
};
use tracing::debug;
use utoipa::ToSchema;

use crate::application::http::{
    ingredient::validators::{DetectIngredientsForm, IMAGES_FIELD, MAX_IMAGE_SIZE},
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DetectIngredientsResponse {
    pub success: bool,
    #[schema(example = json!(["apples", "carrots", "milk"]))]
    pub ingredients: Vec<String>,
    pub count: usize,
}

#[utoipa::path(
    post,
    path = "/detect",
    tag = "ingredient",
    summary = "Detect ingredients in photos",
    description = "Runs the food detector on every uploaded image and returns the sorted union of canonical ingredient names.",
    request_body(content = DetectIngredientsForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, body = DetectIngredientsResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 500, body = ApiErrorResponse)
    ),
)]
pub async fn detect_ingredients(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<DetectIngredientsResponse>, ApiError> {
    let mut images: Vec<UploadedImage> = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        if field.name() != Some(IMAGES_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or("upload").to_string();
        let content_type = field.content_type().map(str::to_string);

        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(format!("Failed to read image: {}", e)))?;

        if data.len() > MAX_IMAGE_SIZE {
            return Err(ApiError::BadRequest(format!(
                "{} is too large. Max size is {} bytes",
                filename, MAX_IMAGE_SIZE
            )));
        }

        debug!(filename = %filename, size = data.len(), "Received image");

        images.push(UploadedImage {
            filename,
            content_type,
            data,
        });
    }

    let detected = state
        .service
        .detect_ingredients(DetectIngredientsInput { images })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DetectIngredientsResponse {
        success: true,
        count: detected.count(),
        ingredients: detected.ingredients,
    }))
}
