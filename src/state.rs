use std::sync::Arc;

use crate::config::AppConfig;
use crate::store::{MessageRepository, StoreConfig};

/// Immutable state shared by every request
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn MessageRepository>,
    /// Echoed (sanitized) by the connectivity probe
    pub store_config: Arc<StoreConfig>,
    pub max_list_limit: i64,
}

impl AppState {
    pub fn new(repository: Arc<dyn MessageRepository>, config: &AppConfig) -> Self {
        Self {
            repository,
            store_config: Arc::new(config.store.clone()),
            max_list_limit: config.server.max_list_limit,
        }
    }
}
