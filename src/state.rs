use std::sync::Arc;

use crate::application::services::CalculatorService;
use crate::config::DEFAULT_CTA_URL;

/// Shared, immutable state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub calculator: Arc<CalculatorService>,
    pub cta_url: Arc<str>,
}

impl AppState {
    pub fn new(calculator: Arc<CalculatorService>, cta_url: impl Into<Arc<str>>) -> Self {
        Self {
            calculator,
            cta_url: cta_url.into(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(CalculatorService::new()), DEFAULT_CTA_URL)
    }
}
