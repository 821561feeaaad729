use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::Config;
use crate::store::RecordStore;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Handlers copy the records they need out of the store and release the lock
/// before running an algorithm; every run builds its own structures.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<RecordStore>>,
    pub config: Config,
}

impl AppState {
    pub fn new(store: RecordStore, config: Config) -> Self {
        AppState {
            store: Arc::new(RwLock::new(store)),
            config,
        }
    }
}
