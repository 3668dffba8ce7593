use std::io::Cursor;
use std::time::Duration;

use base64::{Engine as _, engine::general_purpose};
use image::{DynamicImage, ImageFormat};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::{DetectorConfig, entities::app_errors::CoreError},
    ingredient::{entities::Detection, ports::IngredientDetector},
};

/// Client for an object-detection model served over HTTP.
///
/// The image is re-encoded as JPEG and posted as base64 together with the
/// confidence floor; the server answers with labeled boxes.
#[derive(Debug, Clone)]
pub struct HttpIngredientDetector {
    endpoint: String,
    confidence_floor: f32,
    client: Client,
}

#[derive(Debug, Serialize)]
struct DetectRequest {
    image: String,
    confidence: f32,
}

#[derive(Debug, Deserialize)]
struct DetectResponse {
    #[serde(default)]
    detections: Vec<Detection>,
}

fn encode_jpeg(image: DynamicImage) -> Result<Vec<u8>, CoreError> {
    let mut buffer = Cursor::new(Vec::new());

    // JPEG has no alpha channel
    DynamicImage::ImageRgb8(image.into_rgb8())
        .write_to(&mut buffer, ImageFormat::Jpeg)
        .map_err(|e| CoreError::ImageDecode(format!("failed to re-encode image: {}", e)))?;

    Ok(buffer.into_inner())
}

impl HttpIngredientDetector {
    pub fn new(config: &DetectorConfig) -> Result<Self, CoreError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build detector HTTP client: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Self {
            endpoint: config.endpoint.clone(),
            confidence_floor: config.confidence_floor,
            client,
        })
    }
}

impl IngredientDetector for HttpIngredientDetector {
    async fn detect(&self, image: DynamicImage) -> Result<Vec<Detection>, CoreError> {
        let jpeg = tokio::task::spawn_blocking(move || encode_jpeg(image))
            .await
            .map_err(|e| {
                tracing::error!("Image encoding task failed: {}", e);
                CoreError::InternalServerError
            })??;

        let request = DetectRequest {
            image: general_purpose::STANDARD.encode(&jpeg),
            confidence: self.confidence_floor,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Detector request failed: {}", e);
                CoreError::DetectorError(e.to_string())
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Detector error: {} - {}", status, error_text);
            return Err(CoreError::DetectorError(format!(
                "detector returned {}: {}",
                status, error_text
            )));
        }

        let detections: DetectResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse detector response: {}", e);
            CoreError::DetectorError(format!("invalid detector response: {}", e))
        })?;

        Ok(detections.detections)
    }
}

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};
    use serde_json::json;

    use super::*;
    use crate::domain::ingredient::entities::BoundingBox;

    #[test]
    fn test_rgba_images_are_encoded_as_jpeg() {
        let image = DynamicImage::ImageRgba8(RgbaImage::from_pixel(6, 6, Rgba([255, 0, 0, 128])));

        let jpeg = encode_jpeg(image).unwrap();

        assert_eq!(image::guess_format(&jpeg).unwrap(), ImageFormat::Jpeg);
    }

    #[test]
    fn test_response_parses_boxes() {
        let response: DetectResponse = serde_json::from_value(json!({
            "detections": [
                { "label": "apple", "confidence": 0.91, "box": [1.0, 2.0, 30.0, 40.0] }
            ]
        }))
        .unwrap();

        assert_eq!(response.detections.len(), 1);
        assert_eq!(response.detections[0].label, "apple");
        assert_eq!(
            response.detections[0].bbox,
            BoundingBox {
                x1: 1.0,
                y1: 2.0,
                x2: 30.0,
                y2: 40.0
            }
        );
    }

    #[test]
    fn test_empty_response_means_no_detections() {
        let response: DetectResponse = serde_json::from_value(json!({})).unwrap();
        assert!(response.detections.is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_detector_is_a_detector_error() {
        let detector = HttpIngredientDetector::new(&DetectorConfig {
            endpoint: "http://127.0.0.1:9/predict".to_string(),
            confidence_floor: 0.1,
            timeout_secs: 2,
        })
        .unwrap();

        let result = detector.detect(DynamicImage::new_rgb8(2, 2)).await;

        assert!(matches!(result, Err(CoreError::DetectorError(_))));
    }
}
