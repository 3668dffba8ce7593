use utoipa::ToSchema;

pub const IMAGES_FIELD: &str = "images";

pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB

/// Multipart body of `/api/detect`. `images` may be repeated.
#[derive(Debug, ToSchema)]
pub struct DetectIngredientsForm {
    #[schema(format = Binary, content_media_type = "application/octet-stream")]
    pub images: Vec<u8>,
}
