//! Import Pipeline - bulk-load lesson files into the corpus
//!
//! The input format is "CSV" in the loosest sense: lines split on every
//! comma, no quoting or escaping interpreted. A field containing a literal
//! comma splits in two, and whatever lands in each column is what gets
//! stored. Imports of curated lesson files depend on this staying exactly
//! as-is, so the parser must not get smarter.

use crate::card::{NewSentence, UNKNOWN_DECK};
use crate::storage::SqliteStore;
use crate::Result;

/// Parse lesson text into insertable records.
///
/// The first line is dropped unconditionally as the header. Each remaining
/// line splits on commas; lines with fewer than two fields (blank lines
/// included) are skipped, everything else is kept with each field trimmed.
/// No other validation happens.
///
/// Deck resolution per row: third field if non-empty, else `fallback_deck`
/// if non-empty, else "Unknown Deck". Fields past the third are ignored.
pub fn parse_records(text: &str, fallback_deck: Option<&str>) -> Vec<NewSentence> {
    let fallback = fallback_deck.filter(|d| !d.is_empty()).unwrap_or(UNKNOWN_DECK);

    text.lines()
        .skip(1)
        .filter_map(|line| {
            let fields: Vec<&str> = line.split(',').collect();
            if fields.len() < 2 {
                return None;
            }
            let deck = fields
                .get(2)
                .map(|d| d.trim())
                .filter(|d| !d.is_empty())
                .unwrap_or(fallback);
            Some(NewSentence::new(fields[0].trim(), fields[1].trim(), deck))
        })
        .collect()
}

/// Parse lesson text and insert every accepted record in one transaction.
///
/// All-or-nothing: a failed insert rolls the whole batch back. Returns the
/// number of records accepted by the parser, which is also the number
/// inserted on success.
pub fn import_sentences(
    store: &mut SqliteStore,
    text: &str,
    override_deck: Option<&str>,
) -> Result<usize> {
    let records = parse_records(text, override_deck);
    store.insert_sentences(&records)
}
