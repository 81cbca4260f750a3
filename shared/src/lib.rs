pub mod config;
pub mod error;
pub mod image_processing;
pub mod path;
pub mod respond;
pub mod storage;

use std::sync::Arc;

pub use config::Config;
pub use storage::{ObjectStore, S3Store};

/// Shared application state
pub struct AppState {
    pub store: Arc<dyn ObjectStore>,
    pub config: Config,
}

impl AppState {
    pub fn new(store: impl ObjectStore + 'static, config: Config) -> Arc<Self> {
        Arc::new(Self {
            store: Arc::new(store),
            config,
        })
    }
}
