use std::sync::Arc;

use storage::HealthProfileStore;

/// Shared handler state; the store is chosen once at startup.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn HealthProfileStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn HealthProfileStore>) -> Self {
        Self { store }
    }
}
