//! Storage Layer - SQLite-backed persistence
//!
//! System of record is SQLite with tables:
//! - sentences(id, english, spanish, deck_name)
//! - study_deck(id, sentence_id, is_starred)

pub mod schema;
pub mod sqlite;

pub use sqlite::{SqliteStore, StoreStats};
