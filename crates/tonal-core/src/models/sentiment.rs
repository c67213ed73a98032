use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Binary polarity of a piece of text.
///
/// Serializes as the capitalized display form (`"Positive"`, `"Negative"`),
/// which is also what the store persists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Negative,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
        }
    }

    /// Normalize a raw classifier label such as `POSITIVE` or `negative`.
    ///
    /// The label is capitalized (first letter upper, the rest lower) and must
    /// then name one of the two variants.
    pub fn from_label(label: &str) -> Result<Self, CoreError> {
        capitalize(label.trim()).parse()
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strict parse of the stored form. Use [`Sentiment::from_label`] for raw
/// model output.
impl FromStr for Sentiment {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Positive" => Ok(Sentiment::Positive),
            "Negative" => Ok(Sentiment::Negative),
            other => Err(CoreError::UnknownSentiment(other.to_string())),
        }
    }
}

/// First character upper-cased, remainder lower-cased.
pub fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
