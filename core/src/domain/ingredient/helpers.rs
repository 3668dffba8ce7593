use std::collections::BTreeSet;

use image::DynamicImage;

use crate::domain::{
    common::entities::app_errors::CoreError,
    ingredient::{entities::Detection, normalizer::canonicalize_label},
};

/// Decodes raw upload bytes, guessing the format from the content.
pub fn decode_image(data: &[u8]) -> Result<DynamicImage, CoreError> {
    image::load_from_memory(data).map_err(|e| CoreError::ImageDecode(e.to_string()))
}

/// Canonical ingredients of one image. Detections under the floor are ignored;
/// everything above it counts as equal evidence of presence.
pub fn ingredients_from_detections(
    detections: &[Detection],
    confidence_floor: f32,
) -> BTreeSet<String> {
    detections
        .iter()
        .filter(|detection| detection.confidence >= confidence_floor)
        .filter_map(|detection| canonicalize_label(&detection.label))
        .collect()
}

/// Union of the per-image ingredient sets, deduplicated and sorted.
pub fn aggregate_ingredients<I>(per_image: I) -> Vec<String>
where
    I: IntoIterator<Item = BTreeSet<String>>,
{
    per_image
        .into_iter()
        .flatten()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
