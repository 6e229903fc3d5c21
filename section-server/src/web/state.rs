//! Application state for the web layer.

use std::sync::Arc;

use crate::service::SectionService;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Cached section lookup
    pub sections: Arc<SectionService>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(sections: SectionService) -> Self {
        Self {
            sections: Arc::new(sections),
        }
    }
}
