use std::sync::Arc;

use crate::review::ResumeReviewer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable AI reviewer. Production: `GeminiReviewer`; tests stub it.
    pub reviewer: Arc<dyn ResumeReviewer>,
}
