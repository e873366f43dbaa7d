//! SQLite storage implementation

use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};

use super::schema;
use crate::card::{NewSentence, Sentence, StudyCard, StudyDeckEntry};
use crate::Result;

/// SQLite-backed storage for the sentence corpus and study deck
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open a database file (creates if doesn't exist)
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the database schema
    fn initialize_schema(&self) -> Result<()> {
        for stmt in schema::all_schema_statements() {
            self.conn.execute(stmt, [])?;
        }
        Ok(())
    }

    // ========== Sentence Operations ==========

    /// Insert a sentence, returning its assigned id
    pub fn insert_sentence(&self, record: &NewSentence) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO sentences (english, spanish, deck_name) VALUES (?1, ?2, ?3)",
            params![record.english, record.spanish, record.deck_name],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Insert a batch of sentences inside one transaction.
    ///
    /// Dropping the transaction without commit rolls back, so a failed
    /// insert leaves no partial batch behind.
    pub fn insert_sentences(&mut self, records: &[NewSentence]) -> Result<usize> {
        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO sentences (english, spanish, deck_name) VALUES (?1, ?2, ?3)",
            )?;
            for record in records {
                stmt.execute(params![record.english, record.spanish, record.deck_name])?;
            }
        }
        tx.commit()?;
        Ok(records.len())
    }

    /// Get a sentence by id
    pub fn sentence(&self, id: i64) -> Result<Option<Sentence>> {
        self.conn
            .query_row(
                "SELECT id, english, spanish, deck_name FROM sentences WHERE id = ?1",
                [id],
                |row| self.row_to_sentence(row),
            )
            .optional()
            .map_err(Into::into)
    }

    /// Search sentences by substring match on either language, optionally
    /// restricted to one deck.
    ///
    /// The term is wrapped in `%...%` but never escaped, so `%` and `_`
    /// inside it keep their SQL LIKE meaning. Matching is ASCII
    /// case-insensitive, which is SQLite's LIKE default.
    pub fn search_sentences(&self, term: &str, deck: Option<&str>) -> Result<Vec<Sentence>> {
        let pattern = format!("%{}%", term);

        let sql = if deck.is_some() {
            "SELECT id, english, spanish, deck_name FROM sentences
             WHERE (english LIKE ?1 OR spanish LIKE ?1) AND deck_name = ?2
             ORDER BY id"
        } else {
            "SELECT id, english, spanish, deck_name FROM sentences
             WHERE english LIKE ?1 OR spanish LIKE ?1
             ORDER BY id"
        };

        let mut stmt = self.conn.prepare(sql)?;

        let sentences: Vec<Sentence> = if let Some(d) = deck {
            stmt.query_map(params![pattern, d], |row| self.row_to_sentence(row))?
                .filter_map(|r| r.ok())
                .collect()
        } else {
            stmt.query_map(params![pattern], |row| self.row_to_sentence(row))?
                .filter_map(|r| r.ok())
                .collect()
        };

        Ok(sentences)
    }

    /// Every deck name in the corpus, sorted, one per sentence.
    ///
    /// Duplicates are returned as stored; callers dedupe.
    pub fn deck_names_ordered(&self) -> Result<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT deck_name FROM sentences ORDER BY deck_name")?;

        let names = stmt
            .query_map([], |row| row.get(0))?
            .filter_map(|r| r.ok())
            .collect();

        Ok(names)
    }

    /// Count all sentences
    pub fn count_sentences(&self) -> Result<usize> {
        let count: i64 =
            self.conn
                .query_row("SELECT COUNT(*) FROM sentences", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Count distinct deck names
    pub fn count_decks(&self) -> Result<usize> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(DISTINCT deck_name) FROM sentences",
            [],
            |row| row.get(0),
        )?;
        Ok(count as usize)
    }

    /// Helper to convert a row to a Sentence
    fn row_to_sentence(&self, row: &rusqlite::Row) -> rusqlite::Result<Sentence> {
        Ok(Sentence {
            id: row.get(0)?,
            english: row.get(1)?,
            spanish: row.get(2)?,
            deck_name: row.get(3)?,
        })
    }

    // ========== Study Deck Operations ==========

    /// Adopt a sentence into the study deck.
    ///
    /// Returns `true` if a row was inserted, `false` if the sentence was
    /// already adopted. The UNIQUE constraint on `sentence_id` makes this a
    /// single atomic statement, so two concurrent adds still end up with
    /// one row.
    pub fn add_study_entry(&self, sentence_id: i64) -> Result<bool> {
        let inserted = self.conn.execute(
            "INSERT OR IGNORE INTO study_deck (sentence_id) VALUES (?1)",
            [sentence_id],
        )?;
        Ok(inserted > 0)
    }

    /// Get the study-deck entry for a sentence, if adopted
    pub fn find_study_entry(&self, sentence_id: i64) -> Result<Option<StudyDeckEntry>> {
        self.conn
            .query_row(
                "SELECT id, sentence_id, is_starred FROM study_deck WHERE sentence_id = ?1",
                [sentence_id],
                |row| self.row_to_entry(row),
            )
            .optional()
            .map_err(Into::into)
    }

    /// The study deck joined back to the corpus, in adoption order.
    ///
    /// Entries whose sentence no longer exists are dropped by the inner
    /// join rather than surfaced as an error.
    pub fn study_cards(&self, starred_only: bool) -> Result<Vec<StudyCard>> {
        let sql = if starred_only {
            "SELECT s.id, s.english, s.spanish, s.deck_name, d.is_starred
             FROM study_deck d
             INNER JOIN sentences s ON s.id = d.sentence_id
             WHERE d.is_starred = 1
             ORDER BY d.id"
        } else {
            "SELECT s.id, s.english, s.spanish, s.deck_name, d.is_starred
             FROM study_deck d
             INNER JOIN sentences s ON s.id = d.sentence_id
             ORDER BY d.id"
        };

        let mut stmt = self.conn.prepare(sql)?;

        let cards = stmt
            .query_map([], |row| self.row_to_card(row))?
            .filter_map(|r| r.ok())
            .collect();

        Ok(cards)
    }

    /// Set the starred flag on a study-deck entry.
    ///
    /// Returns the number of rows updated; 0 means the sentence is not in
    /// the deck, which callers treat as a no-op rather than an error.
    pub fn set_starred(&self, sentence_id: i64, starred: bool) -> Result<usize> {
        let updated = self.conn.execute(
            "UPDATE study_deck SET is_starred = ?2 WHERE sentence_id = ?1",
            params![sentence_id, starred],
        )?;
        Ok(updated)
    }

    /// Remove a sentence from the study deck.
    ///
    /// Returns the number of rows deleted; removing an absent entry
    /// deletes 0 rows and is not an error.
    pub fn delete_study_entry(&self, sentence_id: i64) -> Result<usize> {
        let deleted = self.conn.execute(
            "DELETE FROM study_deck WHERE sentence_id = ?1",
            [sentence_id],
        )?;
        Ok(deleted)
    }

    /// Count all study-deck entries
    pub fn count_study_entries(&self) -> Result<usize> {
        let count: i64 =
            self.conn
                .query_row("SELECT COUNT(*) FROM study_deck", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Count starred study-deck entries
    pub fn count_starred(&self) -> Result<usize> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM study_deck WHERE is_starred = 1",
            [],
            |row| row.get(0),
        )?;
        Ok(count as usize)
    }

    /// Helper to convert a row to a StudyDeckEntry
    fn row_to_entry(&self, row: &rusqlite::Row) -> rusqlite::Result<StudyDeckEntry> {
        Ok(StudyDeckEntry {
            id: row.get(0)?,
            sentence_id: row.get(1)?,
            is_starred: row.get(2)?,
        })
    }

    /// Helper to convert a joined row to a StudyCard
    fn row_to_card(&self, row: &rusqlite::Row) -> rusqlite::Result<StudyCard> {
        Ok(StudyCard {
            sentence: Sentence {
                id: row.get(0)?,
                english: row.get(1)?,
                spanish: row.get(2)?,
                deck_name: row.get(3)?,
            },
            is_starred: row.get(4)?,
        })
    }

    // ========== Statistics ==========

    /// Get database statistics
    pub fn stats(&self) -> Result<StoreStats> {
        Ok(StoreStats {
            sentences: self.count_sentences()?,
            decks: self.count_decks()?,
            study_entries: self.count_study_entries()?,
            starred: self.count_starred()?,
        })
    }
}

/// Database statistics
#[derive(Debug, Clone, serde::Serialize)]
pub struct StoreStats {
    pub sentences: usize,
    pub decks: usize,
    pub study_entries: usize,
    pub starred: usize,
}
