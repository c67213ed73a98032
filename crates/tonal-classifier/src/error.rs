use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("model file not found: {path}")]
    MissingFile { path: String },

    #[error("invalid model config: {0}")]
    Config(String),

    #[error("tokenizer error: {0}")]
    Tokenizer(String),

    #[error("inference failed: {0}")]
    Inference(String),

    #[error("unrecognized sentiment label: {0}")]
    UnknownLabel(String),

    #[error("score out of range [0, 1]: {0}")]
    InvalidScore(f64),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<candle_core::Error> for ClassifierError {
    fn from(e: candle_core::Error) -> Self {
        ClassifierError::Inference(e.to_string())
    }
}
