//! Shared application state

use std::sync::Arc;
use std::time::Duration;

use crate::autosave::AutosaveRegistry;
use crate::config::UiConfig;
use crate::store::GraphStore;

/// Shared state for all request handlers
pub struct AppState {
    /// The graph store
    pub store: Arc<GraphStore>,

    /// UI configuration served read-only at /api/config
    pub ui_config: UiConfig,

    /// Per-graph debounced autosave
    pub autosave: AutosaveRegistry,
}

impl AppState {
    /// Create state around a store, with the given debounce delay for
    /// position autosaving
    pub fn new(store: Arc<GraphStore>, ui_config: UiConfig, flush_delay: Duration) -> Self {
        let autosave = AutosaveRegistry::new(Arc::clone(&store), flush_delay);
        Self {
            store,
            ui_config,
            autosave,
        }
    }
}
