use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::TextGenerator;
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable text generator. Production: GeminiClient. Tests swap in a mock.
    pub generator: Arc<dyn TextGenerator>,
    /// Per-visit turn history, used only when generation_mode is Session.
    pub sessions: SessionStore,
    pub config: Config,
}
