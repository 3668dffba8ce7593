use clap::{Args as ClapArgs, Parser};
use sustainabite_core::domain::common::{
    DEFAULT_CONFIDENCE_FLOOR, DEFAULT_GEMINI_MODEL, DetectorConfig, LLMConfig, SustainabiteConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "sustainabite", version, about = "Sustainabite API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub detector: DetectorArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long = "host", env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "port", env = "PORT", default_value_t = 8000)]
    pub port: u16,

    #[arg(long = "root-path", env = "ROOT_PATH", default_value = "")]
    pub root_path: String,

    /// `*` allows any origin without credentials.
    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "*"
    )]
    pub allowed_origins: Vec<String>,

    #[arg(long = "max-body-bytes", env = "MAX_BODY_BYTES", default_value_t = 50 * 1024 * 1024)]
    pub max_body_bytes: usize,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LlmArgs {
    /// Recipe routes answer 503 when unset.
    #[arg(long = "gemini-api-key", env = "GEMINI_API_KEY")]
    pub gemini_api_key: Option<String>,

    #[arg(long = "gemini-model", env = "GEMINI_MODEL", default_value = DEFAULT_GEMINI_MODEL)]
    pub gemini_model: String,

    #[arg(id = "llm_timeout_secs", long = "llm-timeout-secs", env = "LLM_TIMEOUT_SECS", default_value_t = 120)]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct DetectorArgs {
    #[arg(
        long = "detector-url",
        env = "DETECTOR_URL",
        default_value = "http://127.0.0.1:8001/predict"
    )]
    pub url: String,

    #[arg(long = "detector-confidence", env = "DETECTOR_CONFIDENCE", default_value_t = DEFAULT_CONFIDENCE_FLOOR)]
    pub confidence: f32,

    #[arg(id = "detector_timeout_secs", long = "detector-timeout-secs", env = "DETECTOR_TIMEOUT_SECS", default_value_t = 60)]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<Args> for SustainabiteConfig {
    fn from(args: Args) -> Self {
        Self {
            llm: LLMConfig {
                gemini_api_key: args.llm.gemini_api_key,
                gemini_model: args.llm.gemini_model,
                timeout_secs: args.llm.timeout_secs,
            },
            detector: DetectorConfig {
                endpoint: args.detector.url,
                confidence_floor: args.detector.confidence,
                timeout_secs: args.detector.timeout_secs,
            },
        }
    }
}
