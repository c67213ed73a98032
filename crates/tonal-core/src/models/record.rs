use serde::{Deserialize, Serialize};

use super::sentiment::Sentiment;
use crate::error::CoreError;

/// Decimal places kept when a confidence is shown to a user.
pub const DISPLAY_PRECISION: i32 = 4;

/// One persisted classification outcome. Immutable once written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentRecord {
    pub id: i64,
    pub text: String,
    pub sentiment: Sentiment,
    pub confidence: f64,
    pub timestamp: jiff::Timestamp,
}

impl SentimentRecord {
    pub fn display_confidence(&self) -> f64 {
        round_confidence(self.confidence)
    }
}

/// Round a confidence to [`DISPLAY_PRECISION`] decimal places.
pub fn round_confidence(confidence: f64) -> f64 {
    let scale = 10f64.powi(DISPLAY_PRECISION);
    (confidence * scale).round() / scale
}

/// Reject NaN and anything outside `[0.0, 1.0]`.
pub fn check_confidence(confidence: f64) -> Result<f64, CoreError> {
    if (0.0..=1.0).contains(&confidence) {
        Ok(confidence)
    } else {
        Err(CoreError::ConfidenceOutOfRange(confidence))
    }
}

/// Canonical text form of a record timestamp.
///
/// Fixed microsecond precision in UTC, so string order in the database
/// matches chronological order.
pub fn format_timestamp(ts: jiff::Timestamp) -> String {
    format!("{ts:.6}")
}
