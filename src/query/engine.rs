//! Query engine implementation
//!
//! Provides the high-level operations the study surfaces are built on:
//! - Substring search over the corpus, optionally scoped to one deck
//! - Deck name listing
//! - Study deck curation (add / star / remove) and retrieval

use crate::card::{StudyCard, Sentence, ALL_LESSONS};
use crate::storage::SqliteStore;
use crate::Result;

/// Read/curate operations over a sentence store
pub struct StudyQueries<'a> {
    store: &'a SqliteStore,
}

impl<'a> StudyQueries<'a> {
    /// Create a new query handle
    pub fn new(store: &'a SqliteStore) -> Self {
        Self { store }
    }

    /// Search the corpus for sentences containing `term` in either language.
    ///
    /// `deck` narrows the search to one deck; `None`, an empty string, and
    /// the "All Lessons" sentinel all mean unfiltered. An empty term with no
    /// deck filter returns the whole corpus.
    pub fn search(&self, term: &str, deck: Option<&str>) -> Result<Vec<Sentence>> {
        let deck = deck.filter(|d| !d.is_empty() && *d != ALL_LESSONS);
        self.store.search_sentences(term, deck)
    }

    /// Every distinct deck name in the corpus, sorted alphabetically.
    pub fn deck_names(&self) -> Result<Vec<String>> {
        let mut names = self.store.deck_names_ordered()?;
        // Already sorted, so equal names sit next to each other
        names.dedup();
        Ok(names)
    }

    /// Adopt a sentence into the study deck.
    ///
    /// Idempotent: returns `true` when the sentence was newly adopted,
    /// `false` when it was already there.
    pub fn add_to_study_deck(&self, sentence_id: i64) -> Result<bool> {
        self.store.add_study_entry(sentence_id)
    }

    /// The study deck in adoption order, each card carrying its starred
    /// flag. `starred_only` narrows to starred cards.
    pub fn study_deck(&self, starred_only: bool) -> Result<Vec<StudyCard>> {
        self.store.study_cards(starred_only)
    }

    /// Set a card's starred flag.
    ///
    /// Starring a sentence that is not in the deck updates nothing and is
    /// not an error.
    pub fn set_starred(&self, sentence_id: i64, starred: bool) -> Result<()> {
        self.store.set_starred(sentence_id, starred)?;
        Ok(())
    }

    /// Drop a sentence from the study deck.
    ///
    /// Removing an absent sentence is a no-op, so repeated removals settle
    /// into the same state.
    pub fn remove_from_study_deck(&self, sentence_id: i64) -> Result<()> {
        self.store.delete_study_entry(sentence_id)?;
        Ok(())
    }
}
