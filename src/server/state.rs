use crate::logic::RulesEngine;

/// Shared, read-only state for all handlers.
pub struct AppState {
    pub engine: RulesEngine,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            engine: RulesEngine::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
