//! Application state.

use std::sync::Arc;

use codesense_core::Reviewer;

/// Application state shared across handlers. Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub reviewer: Arc<Reviewer>,
}

impl AppState {
    pub fn new(reviewer: Reviewer) -> Self {
        Self {
            reviewer: Arc::new(reviewer),
        }
    }
}
