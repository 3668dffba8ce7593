use std::sync::Arc;

use sustainabite_core::application::SustainabiteService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: SustainabiteService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: SustainabiteService) -> Self {
        Self { args, service }
    }
}
