use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown sentiment: {0}")]
    UnknownSentiment(String),

    #[error("confidence out of range [0, 1]: {0}")]
    ConfidenceOutOfRange(f64),
}

/// Why a submission was not classified. Not a request failure: the
/// handler renders the form without a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("no text field in submission")]
    MissingText,

    #[error("submitted text is empty")]
    EmptyText,
}
