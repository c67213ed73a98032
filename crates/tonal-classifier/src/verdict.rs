use serde::Serialize;

use tonal_core::models::record::check_confidence;
use tonal_core::models::sentiment::Sentiment;

use crate::classifier::Classification;
use crate::error::ClassifierError;

/// A classification normalized for display and storage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Verdict {
    pub sentiment: Sentiment,
    pub confidence: f64,
}

impl TryFrom<Classification> for Verdict {
    type Error = ClassifierError;

    fn try_from(c: Classification) -> Result<Self, Self::Error> {
        let sentiment =
            Sentiment::from_label(&c.label).map_err(|_| ClassifierError::UnknownLabel(c.label))?;
        let confidence =
            check_confidence(c.score).map_err(|_| ClassifierError::InvalidScore(c.score))?;
        Ok(Verdict {
            sentiment,
            confidence,
        })
    }
}
