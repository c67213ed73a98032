use serde::{Deserialize, Serialize};

use crate::error::ClassifierError;

/// Raw model output: the winning label as the model names it (for example
/// `POSITIVE`) and its probability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub label: String,
    pub score: f64,
}

/// A sentiment model, injected into the request handler.
///
/// Implementations may be CPU-bound; callers on an async runtime should run
/// `classify` on the blocking pool.
pub trait Classifier: Send + Sync {
    fn classify(&self, text: &str) -> Result<Classification, ClassifierError>;
}
