use bytes::Bytes;

#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub filename: String,
    pub content_type: Option<String>,
    pub data: Bytes,
}

impl UploadedImage {
    pub fn is_image(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|content_type| content_type.starts_with("image/"))
    }
}

#[derive(Debug, Clone)]
pub struct DetectIngredientsInput {
    pub images: Vec<UploadedImage>,
}
