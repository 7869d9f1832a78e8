use std::sync::Arc;

use crate::service::StringService;
use crate::store::StringStore;

/// Shared application state / 应用共享状态
pub struct AppState {
    pub service: StringService,
}

impl AppState {
    pub fn new(store: Arc<dyn StringStore>) -> Self {
        Self {
            service: StringService::new(store),
        }
    }
}
