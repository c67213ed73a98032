use tonal_core::models::sentiment::Sentiment;
use tonal_storage::error::StorageError;
use tonal_storage::SentimentStore;

async fn fresh_store(dir: &tempfile::TempDir) -> SentimentStore {
    let store = SentimentStore::new(dir.path().join("sentiment.db"));
    store.initialize().await.expect("initialize should succeed");
    store
}

#[tokio::test]
async fn initialize_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let store = fresh_store(&dir).await;
    store.initialize().await.expect("second initialize should succeed");

    assert!(store.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn initialize_creates_missing_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("data").join("sentiment.db");
    let store = SentimentStore::new(&path);

    store.initialize().await.unwrap();
    assert!(path.exists());
}

#[tokio::test]
async fn append_stores_text_verbatim() {
    let dir = tempfile::tempdir().unwrap();
    let store = fresh_store(&dir).await;
    let text = "  Ünïcødé 'quotes' \"and\" ; DROP TABLE x; -- ";

    let id = store.append(text, Sentiment::Negative, 0.75).await.unwrap();

    let records = store.list_all().await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, id);
    assert_eq!(records[0].text, text);
    assert_eq!(records[0].sentiment, Sentiment::Negative);
    assert_eq!(records[0].confidence, 0.75);
}

#[tokio::test]
async fn ids_are_assigned_monotonically() {
    let dir = tempfile::tempdir().unwrap();
    let store = fresh_store(&dir).await;

    let first = store.append("one", Sentiment::Positive, 0.5).await.unwrap();
    let second = store.append("two", Sentiment::Positive, 0.5).await.unwrap();
    let third = store.append("three", Sentiment::Negative, 0.5).await.unwrap();

    assert!(first < second && second < third);
}

#[tokio::test]
async fn list_all_is_newest_first() {
    let dir = tempfile::tempdir().unwrap();
    let store = fresh_store(&dir).await;

    store.append("good", Sentiment::Positive, 0.99).await.unwrap();
    store.append("bad", Sentiment::Negative, 0.98).await.unwrap();

    let records = store.list_all().await.unwrap();
    let texts: Vec<&str> = records.iter().map(|r| r.text.as_str()).collect();
    assert_eq!(texts, ["bad", "good"]);
    assert!(records[0].timestamp >= records[1].timestamp);
}

#[tokio::test]
async fn list_all_returns_every_record() {
    let dir = tempfile::tempdir().unwrap();
    let store = fresh_store(&dir).await;

    for i in 0..25 {
        store
            .append(&format!("entry {i}"), Sentiment::Positive, 0.6)
            .await
            .unwrap();
    }

    let records = store.list_all().await.unwrap();
    assert_eq!(records.len(), 25);
    assert_eq!(records[0].text, "entry 24");
    assert_eq!(records[24].text, "entry 0");
}

#[tokio::test]
async fn records_survive_reopening() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sentiment.db");
    {
        let store = SentimentStore::new(&path);
        store.initialize().await.unwrap();
        store.append("persisted", Sentiment::Positive, 0.9).await.unwrap();
    }

    let reopened = SentimentStore::new(&path);
    reopened.initialize().await.unwrap();
    let records = reopened.list_all().await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].text, "persisted");
}

#[tokio::test]
async fn empty_text_violates_constraint() {
    let dir = tempfile::tempdir().unwrap();
    let store = fresh_store(&dir).await;

    let err = store.append("", Sentiment::Positive, 0.9).await.unwrap_err();
    assert!(matches!(err, StorageError::Constraint(_)), "got {err:?}");
    assert!(store.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn out_of_range_confidence_violates_constraint() {
    let dir = tempfile::tempdir().unwrap();
    let store = fresh_store(&dir).await;

    let err = store.append("hm", Sentiment::Positive, 1.5).await.unwrap_err();
    assert!(matches!(err, StorageError::Constraint(_)), "got {err:?}");
}

#[tokio::test]
async fn append_without_table_fails() {
    let dir = tempfile::tempdir().unwrap();
    let store = SentimentStore::new(dir.path().join("uninitialized.db"));

    let err = store.append("hello", Sentiment::Positive, 0.9).await.unwrap_err();
    assert!(matches!(err, StorageError::Sqlite(_)), "got {err:?}");
}

#[tokio::test]
async fn unreachable_location_fails_to_open() {
    let dir = tempfile::tempdir().unwrap();
    // A directory cannot be opened as a database file.
    let store = SentimentStore::new(dir.path());

    assert!(store.list_all().await.is_err());
}

#[tokio::test]
async fn corrupt_timestamp_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let store = fresh_store(&dir).await;

    let conn = rusqlite::Connection::open(store.path()).unwrap();
    conn.execute(
        "INSERT INTO sentiment_results (text, sentiment, confidence, timestamp)
         VALUES ('odd', 'Positive', 0.5, 'yesterday')",
        [],
    )
    .unwrap();
    drop(conn);

    let err = store.list_all().await.unwrap_err();
    assert!(matches!(err, StorageError::CorruptRow { .. }), "got {err:?}");
}
