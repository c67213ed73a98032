use std::path::{Path, PathBuf};
use std::time::Duration;

use rusqlite::{params, Connection};

use tonal_core::models::record::{format_timestamp, SentimentRecord};
use tonal_core::models::sentiment::Sentiment;
use tonal_core::schema::{column, TABLE};

use crate::error::StorageError;

/// How long a writer waits on a lock held by another connection.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// File-backed store of [`SentimentRecord`]s.
///
/// Holds only the database path. Every operation opens its own connection on
/// the blocking pool and drops it before returning, so the store is cheap to
/// clone and share between handlers.
#[derive(Debug, Clone)]
pub struct SentimentStore {
    path: PathBuf,
}

/// A row as read from SQLite, before domain validation.
struct RawRow {
    id: i64,
    text: String,
    sentiment: String,
    confidence: f64,
    timestamp: String,
}

impl SentimentStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the table if it does not exist. Safe to call on every start.
    pub async fn initialize(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| StorageError::CreateDir {
                    path: parent.display().to_string(),
                    source,
                })?;
        }

        self.with_connection(|conn| {
            conn.execute_batch(&create_table_sql())?;
            Ok(())
        })
        .await?;

        tracing::info!(path = %self.path.display(), "sentiment store initialized");
        Ok(())
    }

    /// Insert one record stamped with the current time. Returns its id.
    pub async fn append(
        &self,
        text: &str,
        sentiment: Sentiment,
        confidence: f64,
    ) -> Result<i64, StorageError> {
        let text = text.to_string();
        let timestamp = format_timestamp(jiff::Timestamp::now());
        let sql = format!(
            "INSERT INTO {TABLE} ({}, {}, {}, {}) VALUES (?1, ?2, ?3, ?4)",
            column::TEXT,
            column::SENTIMENT,
            column::CONFIDENCE,
            column::TIMESTAMP,
        );

        let id = self
            .with_connection(move |conn| {
                conn.execute(
                    &sql,
                    params![text, sentiment.as_str(), confidence, timestamp],
                )?;
                Ok(conn.last_insert_rowid())
            })
            .await?;

        tracing::debug!(id, %sentiment, confidence, "sentiment record appended");
        Ok(id)
    }

    /// All records, most recent first. Read-only.
    pub async fn list_all(&self) -> Result<Vec<SentimentRecord>, StorageError> {
        let sql = format!(
            "SELECT {}, {}, {}, {}, {} FROM {TABLE} ORDER BY {} DESC, {} DESC",
            column::ID,
            column::TEXT,
            column::SENTIMENT,
            column::CONFIDENCE,
            column::TIMESTAMP,
            column::TIMESTAMP,
            column::ID,
        );

        let rows = self
            .with_connection(move |conn| {
                let mut stmt = conn.prepare(&sql)?;
                let rows = stmt.query_map([], |row| {
                    Ok(RawRow {
                        id: row.get(0)?,
                        text: row.get(1)?,
                        sentiment: row.get(2)?,
                        confidence: row.get(3)?,
                        timestamp: row.get(4)?,
                    })
                })?;

                let mut result = Vec::new();
                for row in rows {
                    result.push(row?);
                }
                Ok(result)
            })
            .await?;

        rows.into_iter().map(decode_row).collect()
    }

    /// Run `op` against a fresh connection on the blocking pool.
    async fn with_connection<T, F>(&self, op: F) -> Result<T, StorageError>
    where
        T: Send + 'static,
        F: FnOnce(&Connection) -> Result<T, StorageError> + Send + 'static,
    {
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || {
            let conn = open(&path)?;
            op(&conn)
        })
        .await
        .map_err(|e| StorageError::Task(e.to_string()))?
    }
}

fn open(path: &Path) -> Result<Connection, StorageError> {
    let conn = Connection::open(path).map_err(|source| StorageError::Open {
        path: path.display().to_string(),
        source,
    })?;
    conn.busy_timeout(BUSY_TIMEOUT)?;
    Ok(conn)
}

fn create_table_sql() -> String {
    format!(
        "CREATE TABLE IF NOT EXISTS {TABLE} (
            {id} INTEGER PRIMARY KEY AUTOINCREMENT,
            {text} TEXT NOT NULL CHECK (length({text}) > 0),
            {sentiment} TEXT NOT NULL CHECK ({sentiment} IN ('Positive', 'Negative')),
            {confidence} REAL NOT NULL CHECK ({confidence} >= 0.0 AND {confidence} <= 1.0),
            {timestamp} TEXT NOT NULL
        )",
        id = column::ID,
        text = column::TEXT,
        sentiment = column::SENTIMENT,
        confidence = column::CONFIDENCE,
        timestamp = column::TIMESTAMP,
    )
}

fn decode_row(row: RawRow) -> Result<SentimentRecord, StorageError> {
    let sentiment: Sentiment = row.sentiment.parse().map_err(|e| StorageError::CorruptRow {
        id: row.id,
        reason: format!("{e}"),
    })?;
    let timestamp: jiff::Timestamp = row.timestamp.parse().map_err(|e| StorageError::CorruptRow {
        id: row.id,
        reason: format!("bad timestamp {:?}: {e}", row.timestamp),
    })?;

    Ok(SentimentRecord {
        id: row.id,
        text: row.text,
        sentiment,
        confidence: row.confidence,
        timestamp,
    })
}
