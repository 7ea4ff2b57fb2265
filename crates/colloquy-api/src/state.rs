use std::sync::Arc;

use colloquy_persist::ThreadStore;
use colloquy_state::FilterStateBroadcaster;

use crate::config::Config;

/// Shared application state passed to all handlers
///
/// All resources are wrapped in Arc for efficient sharing across async
/// tasks. The broadcaster is the process-wide filter state instance owned by
/// the composition root.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: Arc<ThreadStore>,
    pub filters: Arc<FilterStateBroadcaster>,
}

impl AppState {
    pub fn new(config: Config, store: ThreadStore, filters: Arc<FilterStateBroadcaster>) -> Self {
        Self {
            config: Arc::new(config),
            store: Arc::new(store),
            filters,
        }
    }
}
