use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to open database {path}: {source}")]
    Open {
        path: String,
        source: rusqlite::Error,
    },

    #[error("failed to create database directory {path}: {source}")]
    CreateDir {
        path: String,
        source: std::io::Error,
    },

    #[error("constraint violated: {0}")]
    Constraint(String),

    #[error("SQLite error: {0}")]
    Sqlite(rusqlite::Error),

    #[error("corrupt row {id}: {reason}")]
    CorruptRow { id: i64, reason: String },

    #[error("storage task failed: {0}")]
    Task(String),
}

impl From<rusqlite::Error> for StorageError {
    fn from(e: rusqlite::Error) -> Self {
        match e {
            rusqlite::Error::SqliteFailure(ref code, ref message)
                if code.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                StorageError::Constraint(message.clone().unwrap_or_else(|| code.to_string()))
            }
            other => StorageError::Sqlite(other),
        }
    }
}
