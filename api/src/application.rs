pub mod http;
pub mod llm_middleware;
