use std::sync::Arc;

use tonal_classifier::Classifier;
use tonal_storage::SentimentStore;

use crate::error::RenderError;
use crate::render::Views;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub store: SentimentStore,
    pub classifier: Arc<dyn Classifier>,
    pub views: Arc<Views>,
}

impl AppState {
    pub fn new(store: SentimentStore, classifier: Arc<dyn Classifier>) -> Result<Self, RenderError> {
        Ok(Self {
            store,
            classifier,
            views: Arc::new(Views::new()?),
        })
    }
}
