use std::collections::BTreeSet;

use futures::future::try_join_all;
use tracing::{debug, error, info};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    ingredient::{
        entities::DetectedIngredients,
        helpers::{aggregate_ingredients, decode_image, ingredients_from_detections},
        ports::{IngredientDetectionService, IngredientDetector},
        value_objects::{DetectIngredientsInput, UploadedImage},
    },
    recipe::ports::LLMClient,
};

impl<D, LLM> IngredientDetectionService for Service<D, LLM>
where
    D: IngredientDetector,
    LLM: LLMClient,
{
    async fn detect_ingredients(
        &self,
        input: DetectIngredientsInput,
    ) -> Result<DetectedIngredients, CoreError> {
        if input.images.is_empty() {
            return Err(CoreError::InvalidInput("No images provided".to_string()));
        }

        // Reject the whole batch before any inference runs.
        if let Some(upload) = input.images.iter().find(|upload| !upload.is_image()) {
            return Err(CoreError::InvalidInput(format!(
                "{} is not an image",
                upload.filename
            )));
        }

        let image_count = input.images.len();
        let per_image = try_join_all(
            input
                .images
                .into_iter()
                .map(|upload| self.ingredients_in_image(upload)),
        )
        .await?;

        let ingredients = aggregate_ingredients(per_image);

        info!(
            images = image_count,
            ingredients = ingredients.len(),
            "Ingredient detection completed"
        );

        Ok(DetectedIngredients { ingredients })
    }
}

impl<D, LLM> Service<D, LLM>
where
    D: IngredientDetector,
    LLM: LLMClient,
{
    async fn ingredients_in_image(
        &self,
        upload: UploadedImage,
    ) -> Result<BTreeSet<String>, CoreError> {
        let UploadedImage { filename, data, .. } = upload;

        let image = tokio::task::spawn_blocking(move || decode_image(&data))
            .await
            .map_err(|e| {
                error!("Image decoding task failed: {}", e);
                CoreError::InternalServerError
            })??;

        let detections = self.detector.detect(image).await?;
        debug!(filename = %filename, detections = detections.len(), "Detector returned");

        Ok(ingredients_from_detections(
            &detections,
            self.confidence_floor,
        ))
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use image::DynamicImage;

    use super::*;
    use crate::domain::{
        ingredient::{entities::Detection, ports::MockIngredientDetector},
        recipe::ports::MockLLMClient,
    };

    fn png_bytes() -> Bytes {
        let mut buffer = std::io::Cursor::new(Vec::new());
        DynamicImage::new_rgb8(8, 8)
            .write_to(&mut buffer, image::ImageFormat::Png)
            .unwrap();
        Bytes::from(buffer.into_inner())
    }

    fn upload(filename: &str, content_type: Option<&str>, data: Bytes) -> UploadedImage {
        UploadedImage {
            filename: filename.to_string(),
            content_type: content_type.map(str::to_string),
            data,
        }
    }

    fn service(detector: MockIngredientDetector) -> Service<MockIngredientDetector, MockLLMClient> {
        Service::new(detector, None, "test-model".to_string(), 0.1)
    }

    #[tokio::test]
    async fn test_no_images_is_invalid_input() {
        let mut detector = MockIngredientDetector::new();
        detector.expect_detect().never();

        let result = service(detector)
            .detect_ingredients(DetectIngredientsInput { images: vec![] })
            .await;

        assert_eq!(
            result,
            Err(CoreError::InvalidInput("No images provided".to_string()))
        );
    }

    #[tokio::test]
    async fn test_non_image_content_type_rejects_whole_batch() {
        let mut detector = MockIngredientDetector::new();
        detector.expect_detect().never();

        let result = service(detector)
            .detect_ingredients(DetectIngredientsInput {
                images: vec![
                    upload("fridge.png", Some("image/png"), png_bytes()),
                    upload("notes.txt", Some("text/plain"), Bytes::from_static(b"hello")),
                ],
            })
            .await;

        assert_eq!(
            result,
            Err(CoreError::InvalidInput("notes.txt is not an image".to_string()))
        );
    }

    #[tokio::test]
    async fn test_missing_content_type_is_not_an_image() {
        let mut detector = MockIngredientDetector::new();
        detector.expect_detect().never();

        let result = service(detector)
            .detect_ingredients(DetectIngredientsInput {
                images: vec![upload("blob", None, png_bytes())],
            })
            .await;

        assert!(matches!(result, Err(CoreError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_union_across_images_is_sorted_and_deduplicated() {
        let mut detector = MockIngredientDetector::new();
        detector.expect_detect().times(2).returning(|_| {
            Box::pin(async {
                Ok(vec![
                    Detection::new("apple", 0.8),
                    Detection::new("Fried Rice", 0.5),
                    Detection::new("bowl", 0.9),
                    Detection::new("carrot", 0.02),
                ])
            })
        });

        let result = service(detector)
            .detect_ingredients(DetectIngredientsInput {
                images: vec![
                    upload("a.png", Some("image/png"), png_bytes()),
                    upload("b.png", Some("image/png"), png_bytes()),
                ],
            })
            .await
            .unwrap();

        assert_eq!(
            result.ingredients,
            vec!["apples".to_string(), "fried rice".to_string()]
        );
        assert_eq!(result.count(), 2);
    }

    #[tokio::test]
    async fn test_undecodable_image_fails_the_batch() {
        let mut detector = MockIngredientDetector::new();
        detector
            .expect_detect()
            .returning(|_| Box::pin(async { Ok(vec![Detection::new("apple", 0.8)]) }));

        let result = service(detector)
            .detect_ingredients(DetectIngredientsInput {
                images: vec![
                    upload("good.png", Some("image/png"), png_bytes()),
                    upload("bad.jpg", Some("image/jpeg"), Bytes::from_static(b"not a jpeg")),
                ],
            })
            .await;

        assert!(matches!(result, Err(CoreError::ImageDecode(_))));
    }

    #[tokio::test]
    async fn test_detector_failure_is_surfaced() {
        let mut detector = MockIngredientDetector::new();
        detector.expect_detect().returning(|_| {
            Box::pin(async { Err(CoreError::DetectorError("model offline".to_string())) })
        });

        let result = service(detector)
            .detect_ingredients(DetectIngredientsInput {
                images: vec![upload("a.png", Some("image/png"), png_bytes())],
            })
            .await;

        assert_eq!(
            result,
            Err(CoreError::DetectorError("model offline".to_string()))
        );
    }
}
