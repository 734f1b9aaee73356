//! Shared application state for all routes.

use crate::config::ServiceConfig;
use crate::store::UserStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn UserStore>,
    /// Resolved at start; read-only afterwards.
    pub config: Arc<ServiceConfig>,
}

impl AppState {
    pub fn new(store: impl UserStore + 'static, config: ServiceConfig) -> Self {
        AppState {
            store: Arc::new(store),
            config: Arc::new(config),
        }
    }
}
