//! Application state shared by all handlers.

use filemeta_core::{Config, UploadIngestor};

#[derive(Clone, Debug)]
pub struct AppState {
    pub config: Config,
    pub ingestor: UploadIngestor,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            ingestor: UploadIngestor::new(),
        }
    }
}
