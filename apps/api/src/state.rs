use std::sync::Arc;

use crate::config::Config;
use crate::enrichment::ProfileEnricher;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum
/// extractors. The AI and enrichment clients are constructed once at startup
/// and treated as read-only for the process lifetime.
#[derive(Clone)]
pub struct AppState {
    pub llm: Arc<dyn TextGenerator>,
    pub enricher: Arc<dyn ProfileEnricher>,
    /// Kept for handlers that need runtime configuration (none yet).
    #[allow(dead_code)]
    pub config: Config,
}
