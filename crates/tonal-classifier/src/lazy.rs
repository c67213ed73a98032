use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};

use crate::classifier::{Classification, Classifier};
use crate::distilbert::DistilBertClassifier;
use crate::error::ClassifierError;

/// A [`DistilBertClassifier`] loaded on first use.
///
/// While the model files are missing or broken every `classify` call fails
/// with the load error, and the next call tries again. Once loaded, the model
/// is kept for the life of the process.
pub struct LazyDistilBert {
    model_dir: PathBuf,
    model: OnceLock<DistilBertClassifier>,
    loading: Mutex<()>,
}

impl LazyDistilBert {
    pub fn new(model_dir: impl Into<PathBuf>) -> Self {
        Self {
            model_dir: model_dir.into(),
            model: OnceLock::new(),
            loading: Mutex::new(()),
        }
    }

    pub fn model_dir(&self) -> &Path {
        &self.model_dir
    }

    pub fn is_loaded(&self) -> bool {
        self.model.get().is_some()
    }

    /// Return the loaded model, loading it now if needed. Concurrent callers
    /// wait for a single load attempt.
    pub fn ensure_loaded(&self) -> Result<&DistilBertClassifier, ClassifierError> {
        if let Some(model) = self.model.get() {
            return Ok(model);
        }

        // The guarded value is `()`, so a poisoned lock carries no broken state.
        let _guard = self.loading.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(model) = self.model.get() {
            return Ok(model);
        }

        let model = DistilBertClassifier::load(&self.model_dir).inspect_err(|e| {
            tracing::warn!(
                model_dir = %self.model_dir.display(),
                error = %e,
                "sentiment model load failed"
            );
        })?;
        Ok(self.model.get_or_init(|| model))
    }
}

impl Classifier for LazyDistilBert {
    fn classify(&self, text: &str) -> Result<Classification, ClassifierError> {
        self.ensure_loaded()?.classify(text)
    }
}
