//! tonal-core
//!
//! Pure domain types for the Tonal sentiment journal: the sentiment label,
//! the persisted record, submission validation, and table/column names.
//! No I/O; this is the shared vocabulary of the other crates.

pub mod error;
pub mod models;
pub mod schema;
