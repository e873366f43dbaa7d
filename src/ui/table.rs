use tabled::{settings::Style, Table, Tabled};

use crate::card::{Sentence, StudyCard};
use crate::ui::Icons;

#[derive(Tabled)]
struct SentenceRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "English")]
    english: String,
    #[tabled(rename = "Spanish")]
    spanish: String,
    #[tabled(rename = "Deck")]
    deck: String,
}

impl From<&Sentence> for SentenceRow {
    fn from(sentence: &Sentence) -> Self {
        Self {
            id: sentence.id,
            english: sentence.english.clone(),
            spanish: sentence.spanish.clone(),
            deck: sentence.deck_name.clone(),
        }
    }
}

#[derive(Tabled)]
struct StudyRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "English")]
    english: String,
    #[tabled(rename = "Spanish")]
    spanish: String,
    #[tabled(rename = "Deck")]
    deck: String,
    #[tabled(rename = "Starred")]
    starred: String,
}

impl From<&StudyCard> for StudyRow {
    fn from(card: &StudyCard) -> Self {
        Self {
            id: card.sentence.id,
            english: card.sentence.english.clone(),
            spanish: card.sentence.spanish.clone(),
            deck: card.sentence.deck_name.clone(),
            starred: if card.is_starred {
                Icons::STAR.to_string()
            } else {
                String::new()
            },
        }
    }
}

/// Render search results as a table
pub fn sentence_table(sentences: &[Sentence]) -> String {
    if sentences.is_empty() {
        return String::new();
    }

    let rows: Vec<SentenceRow> = sentences.iter().map(Into::into).collect();
    Table::new(rows).with(Style::rounded()).to_string()
}

/// Render the study deck as a table, stars in the last column
pub fn study_table(cards: &[StudyCard]) -> String {
    if cards.is_empty() {
        return String::new();
    }

    let rows: Vec<StudyRow> = cards.iter().map(Into::into).collect();
    Table::new(rows).with(Style::rounded()).to_string()
}

#[derive(Tabled)]
pub struct TableRow {
    #[tabled(rename = "Metric")]
    pub metric: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

pub struct TableBuilder {
    rows: Vec<TableRow>,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn add_row(&mut self, label: &str, value: &str) {
        self.rows.push(TableRow {
            metric: label.to_string(),
            value: value.to_string(),
        });
    }

    pub fn build(&self) -> String {
        if self.rows.is_empty() {
            return String::new();
        }

        Table::new(&self.rows).with(Style::rounded()).to_string()
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn stats_table(stats: &[(&str, &str)]) -> String {
    let mut builder = TableBuilder::new();
    for (label, value) in stats {
        builder.add_row(label, value);
    }
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_card(id: i64, starred: bool) -> StudyCard {
        StudyCard::new(
            Sentence {
                id,
                english: "Hello".to_string(),
                spanish: "Hola".to_string(),
                deck_name: "Greetings".to_string(),
            },
            starred,
        )
    }

    #[test]
    fn test_empty_tables_render_nothing() {
        assert!(sentence_table(&[]).is_empty());
        assert!(study_table(&[]).is_empty());
        assert!(TableBuilder::new().build().is_empty());
    }

    #[test]
    fn test_study_table_marks_starred_rows() {
        let rendered = study_table(&[sample_card(1, true), sample_card(2, false)]);

        assert!(rendered.contains(Icons::STAR));
        assert!(rendered.contains("Hola"));
    }

    #[test]
    fn test_stats_table_lists_metrics() {
        let rendered = stats_table(&[("Sentences", "3"), ("Starred", "1")]);

        assert!(rendered.contains("Metric"));
        assert!(rendered.contains("Sentences"));
        assert!(rendered.contains("Starred"));
    }
}
