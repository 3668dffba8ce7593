pub mod http_detector;

pub use http_detector::HttpIngredientDetector;
