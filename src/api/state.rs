//! API server state

use std::sync::Arc;

use crate::store::ActivityStore;

/// API server state
#[derive(Clone)]
pub struct AppState {
    /// Activity store shared by every handler
    pub store: Arc<ActivityStore>,
}

impl AppState {
    pub fn new(store: Arc<ActivityStore>) -> Self {
        Self { store }
    }

    /// State backed by the standard seed set
    pub fn seeded() -> Self {
        Self::new(Arc::new(ActivityStore::seeded()))
    }
}
