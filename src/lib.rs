//! # Repaso - Sentence-pair flashcard service
//!
//! Stores a bilingual sentence corpus (English/Spanish pairs grouped into
//! named lesson decks) and a personal study deck curated from it.
//!
//! Repaso provides:
//! - SQLite-backed corpus with `sentences` and `study_deck` tables
//! - Query layer for corpus search, deck enumeration, and study-deck curation
//! - Import pipeline for comma-delimited lesson files
//! - HTTP surface for the presentation layer: search/deck/study-deck routes
//!   plus a multipart import endpoint

pub mod card;
pub mod storage;
pub mod query;
pub mod import;
pub mod server;
pub mod ui;
pub mod config;

// Re-exports for convenient access
pub use card::{NewSentence, Sentence, StudyCard, StudyDeckEntry, ALL_LESSONS, UNKNOWN_DECK};
pub use query::StudyQueries;
pub use storage::SqliteStore;

/// Result type alias for Repaso operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Repaso operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),
}
