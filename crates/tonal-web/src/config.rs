use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::ConfigError;

pub const BIND_VAR: &str = "TONAL_BIND";
pub const DB_PATH_VAR: &str = "TONAL_DB_PATH";
pub const MODEL_DIR_VAR: &str = "TONAL_MODEL_DIR";
pub const LOG_FORMAT_VAR: &str = "TONAL_LOG_FORMAT";

const DEFAULT_BIND: &str = "0.0.0.0:5000";
const DEFAULT_DB_PATH: &str = "sentiment.db";
const DEFAULT_MODEL_DIR: &str = "models/distilbert-base-uncased-finetuned-sst-2-english";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines.
    Text,
    /// One JSON object per event.
    Json,
}

/// Process configuration, read from `TONAL_*` environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct WebConfig {
    pub bind: SocketAddr,
    pub db_path: PathBuf,
    pub model_dir: PathBuf,
    pub log_format: LogFormat,
}

impl WebConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from an arbitrary variable source. Unset or empty variables fall
    /// back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str, default: &str| {
            lookup(var)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let bind_raw = get(BIND_VAR, DEFAULT_BIND);
        let bind = bind_raw
            .trim()
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::Invalid {
                var: BIND_VAR,
                value: bind_raw.clone(),
                reason: e.to_string(),
            })?;

        let format_raw = get(LOG_FORMAT_VAR, "text");
        let log_format = match format_raw.trim().to_ascii_lowercase().as_str() {
            "text" | "pretty" => LogFormat::Text,
            "json" => LogFormat::Json,
            _ => {
                return Err(ConfigError::Invalid {
                    var: LOG_FORMAT_VAR,
                    value: format_raw,
                    reason: "expected \"text\" or \"json\"".to_string(),
                });
            }
        };

        Ok(Self {
            bind,
            db_path: PathBuf::from(get(DB_PATH_VAR, DEFAULT_DB_PATH)),
            model_dir: PathBuf::from(get(MODEL_DIR_VAR, DEFAULT_MODEL_DIR)),
            log_format,
        })
    }
}
