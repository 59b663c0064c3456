use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::TextCompleter;
use crate::random::SharedRng;
use crate::store::KeyValueStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// Redis in production, `MemoryStore` in tests.
    pub store: Arc<dyn KeyValueStore>,
    /// Remote completion backend. `None` when no API key is configured.
    pub completer: Option<Arc<dyn TextCompleter>>,
    pub rng: SharedRng,
}

impl AppState {
    pub fn completer(&self) -> Option<&dyn TextCompleter> {
        self.completer.as_deref()
    }
}
