use std::sync::Arc;

use crate::config::Config;
use crate::matcher::engine::CareerEngine;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Matching engine holding the fitted vector space and job corpus.
    pub engine: Arc<CareerEngine>,
    pub config: Config,
}
