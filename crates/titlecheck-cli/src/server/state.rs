//! Application state for the web server.

use std::sync::Arc;

use titlecheck::TitleChecker;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Checker shared by every request; it holds no per-run state.
    pub checker: Arc<TitleChecker>,
}

impl AppState {
    /// Create new application state.
    pub fn new(checker: TitleChecker) -> Self {
        Self {
            checker: Arc::new(checker),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(TitleChecker::new())
    }
}
