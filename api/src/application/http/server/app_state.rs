use std::sync::Arc;

use nutriai_core::application::NutriAiService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: NutriAiService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: NutriAiService) -> Self {
        Self { args, service }
    }
}
