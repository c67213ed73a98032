//! tonal-classifier
//!
//! The sentiment model boundary. Handlers depend on the [`Classifier`] trait;
//! [`DistilBertClassifier`] runs a Hugging Face DistilBERT SST-2 export
//! locally with candle, and [`LazyDistilBert`] defers loading it until the
//! first classification.

pub mod classifier;
pub mod distilbert;
pub mod error;
pub mod lazy;
pub mod verdict;

pub use classifier::{Classification, Classifier};
pub use distilbert::DistilBertClassifier;
pub use lazy::LazyDistilBert;
pub use verdict::Verdict;
