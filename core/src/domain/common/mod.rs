pub mod entities;
pub mod services;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_CONFIDENCE_FLOOR: f32 = 0.1;

#[derive(Clone, Debug)]
pub struct SustainabiteConfig {
    pub llm: LLMConfig,
    pub detector: DetectorConfig,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    /// Recipe generation is disabled when no key is configured.
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub timeout_secs: u64,
}

#[derive(Clone, Debug)]
pub struct DetectorConfig {
    pub endpoint: String,
    pub confidence_floor: f32,
    pub timeout_secs: u64,
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            timeout_secs: 120,
        }
    }
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:8001/predict".to_string(),
            confidence_floor: DEFAULT_CONFIDENCE_FLOOR,
            timeout_secs: 60,
        }
    }
}
