//! Database schema definitions

/// SQL to create the sentences table
pub const CREATE_SENTENCES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS sentences (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    english TEXT NOT NULL,
    spanish TEXT NOT NULL,
    deck_name TEXT NOT NULL
)
"#;

/// SQL to create the study_deck table
///
/// `sentence_id` is UNIQUE so a sentence can be adopted at most once; adds
/// go through `INSERT OR IGNORE` and concurrent adds collapse to one row.
/// It is deliberately not a foreign key - entries may outlive the sentence
/// they point at, and the join query just skips them.
pub const CREATE_STUDY_DECK_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS study_deck (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    sentence_id INTEGER NOT NULL UNIQUE,
    is_starred INTEGER NOT NULL DEFAULT 0
)
"#;

/// SQL to create indexes
pub const CREATE_INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_sentences_deck ON sentences(deck_name)",
    "CREATE INDEX IF NOT EXISTS idx_sentences_english ON sentences(english)",
    "CREATE INDEX IF NOT EXISTS idx_sentences_spanish ON sentences(spanish)",
];

/// All schema creation statements
pub fn all_schema_statements() -> Vec<&'static str> {
    let mut stmts = vec![CREATE_SENTENCES_TABLE, CREATE_STUDY_DECK_TABLE];
    stmts.extend(CREATE_INDEXES.iter().copied());
    stmts
}
