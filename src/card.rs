//! Card types - the records the corpus and the study deck are made of.
//!
//! Two tables back the whole system:
//! - `sentences`: the shared corpus of translation pairs, each tagged with a
//!   free-text deck name (a grouping label, not a managed entity)
//! - `study_deck`: the user's curated subset, at most one row per adopted
//!   sentence, carrying the starred flag

use serde::{Deserialize, Serialize};

/// Deck selector sentinel meaning "no deck filter".
pub const ALL_LESSONS: &str = "All Lessons";

/// Deck label for imported rows that carry no deck of their own, when the
/// importer supplies no override either.
pub const UNKNOWN_DECK: &str = "Unknown Deck";

/// A stored translation pair.
///
/// `english` and `spanish` are expected non-empty after trimming, but this
/// is not enforced anywhere - empty strings pass through silently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    /// Unique identifier, assigned by the store on insert
    pub id: i64,
    pub english: String,
    pub spanish: String,
    /// Free-text grouping label (lesson name), not a foreign key
    pub deck_name: String,
}

/// A translation pair ready for insertion (no id yet).
///
/// This is what the import pipeline produces, one per accepted line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSentence {
    pub english: String,
    pub spanish: String,
    pub deck_name: String,
}

impl NewSentence {
    pub fn new(
        english: impl Into<String>,
        spanish: impl Into<String>,
        deck_name: impl Into<String>,
    ) -> Self {
        Self {
            english: english.into(),
            spanish: spanish.into(),
            deck_name: deck_name.into(),
        }
    }
}

/// A row linking the study deck to a corpus sentence.
///
/// Ownership is by reference only: nothing cascades when a sentence
/// disappears out from under an entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyDeckEntry {
    pub id: i64,
    pub sentence_id: i64,
    pub is_starred: bool,
}

/// A study-deck card: the referenced sentence overlaid with the entry's
/// starred flag.
///
/// Serializes flat, so the wire shape is
/// `{id, english, spanish, deck_name, is_starred}` - the same record the
/// card-flip UI reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyCard {
    #[serde(flatten)]
    pub sentence: Sentence,
    pub is_starred: bool,
}

impl StudyCard {
    pub fn new(sentence: Sentence, is_starred: bool) -> Self {
        Self {
            sentence,
            is_starred,
        }
    }
}
