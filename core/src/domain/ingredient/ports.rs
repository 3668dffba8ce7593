use std::future::Future;

use image::DynamicImage;

use crate::domain::{
    common::entities::app_errors::CoreError,
    ingredient::{
        entities::{DetectedIngredients, Detection},
        value_objects::DetectIngredientsInput,
    },
};

/// Pretrained vision model returning labeled regions for one image.
#[cfg_attr(test, mockall::automock)]
pub trait IngredientDetector: Send + Sync {
    fn detect(
        &self,
        image: DynamicImage,
    ) -> impl Future<Output = Result<Vec<Detection>, CoreError>> + Send;
}

/// Service trait for ingredient detection
#[cfg_attr(test, mockall::automock)]
pub trait IngredientDetectionService: Send + Sync {
    fn detect_ingredients(
        &self,
        input: DetectIngredientsInput,
    ) -> impl Future<Output = Result<DetectedIngredients, CoreError>> + Send;
}
