//! tonal-storage
//!
//! SQLite persistence for sentiment records. One file-backed table,
//! append-only, with a connection opened and dropped per operation.

pub mod error;
pub mod store;

pub use store::SentimentStore;
