//! Repaso CLI - sentence-pair flashcards from the command line

use clap::{Parser, Subcommand};
use repaso::config::{self, RepasoConfig};
use repaso::query::StudyQueries;
use repaso::storage::SqliteStore;
use repaso::ui::{self, Icons};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "repaso")]
#[command(version = "0.1.0")]
#[command(about = "Sentence-pair flashcard service - bilingual corpus, study deck, lesson import")]
#[command(long_about = r#"
Repaso keeps a bilingual sentence corpus in SQLite and runs the flashcard
workflow around it:
  • Substring search across English and Spanish
  • A personal study deck with starred favorites
  • Bulk import of comma-delimited lesson files
  • An HTTP API for the browser front end

Example usage:
  repaso init
  repaso import --file lessons.csv --deck "Lesson 1"
  repaso search --term casa
  repaso study add 5
  repaso serve --port 4173
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write repaso.toml and create the database
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },

    /// Run the HTTP server
    Serve {
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,
    },

    /// Import a comma-delimited lesson file into the corpus
    Import {
        /// Path to the lesson file
        #[arg(short, long)]
        file: PathBuf,

        /// Deck name for rows that carry none
        #[arg(long)]
        deck: Option<String>,

        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,
    },

    /// Search the corpus in either language
    Search {
        /// Search term; empty matches everything
        #[arg(short, long, default_value = "")]
        term: String,

        /// Restrict to one deck
        #[arg(long)]
        deck: Option<String>,

        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,
    },

    /// List deck names
    Decks {
        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,
    },

    /// Manage the study deck
    Study {
        #[command(subcommand)]
        command: StudyCommands,
    },

    /// Show corpus and study-deck statistics
    Stats {
        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum StudyCommands {
    /// List the study deck
    List {
        /// Only starred cards
        #[arg(short, long)]
        starred: bool,

        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,
    },

    /// Add a sentence to the study deck
    Add {
        /// Sentence id
        sentence_id: i64,

        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,
    },

    /// Remove a sentence from the study deck
    Remove {
        /// Sentence id
        sentence_id: i64,

        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,
    },

    /// Star a card
    Star {
        /// Sentence id
        sentence_id: i64,

        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,
    },

    /// Remove a card's star
    Unstar {
        /// Sentence id
        sentence_id: i64,

        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,
    },
}

fn resolve_database(flag: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    let config = config::load_config(None)?;
    Ok(config::resolve_database(flag, config.as_ref()))
}

fn resolve_port(flag: Option<u16>) -> anyhow::Result<u16> {
    let config = config::load_config(None)?;
    Ok(config::resolve_port(flag, config.as_ref()))
}

fn open_store(database: Option<PathBuf>) -> anyhow::Result<SqliteStore> {
    let database = resolve_database(database)?;
    Ok(SqliteStore::open(&database)?)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    match cli.command {
        Commands::Init { force } => {
            let config_path = config::default_config_path();
            let config = RepasoConfig {
                database: Some(config::default_database_path().display().to_string()),
                port: Some(config::DEFAULT_PORT),
            };
            config::write_config(&config_path, &config, force)?;
            ui::success(&format!("Wrote {}", config_path.display()));

            let database = resolve_database(None)?;
            config::ensure_db_dir(&database)?;
            SqliteStore::open(&database)?;
            ui::status(Icons::DATABASE, "Database ready", &database.display().to_string());
        }

        Commands::Serve { port, database } => {
            let database = resolve_database(database)?;
            let port = resolve_port(port)?;
            config::ensure_db_dir(&database)?;

            ui::header("Starting Repaso server");
            ui::status(Icons::DATABASE, "Database", &database.display().to_string());

            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(repaso::server::start_server(port, database))?;
        }

        Commands::Import { file, deck, database } => {
            let database = resolve_database(database)?;
            config::ensure_db_dir(&database)?;
            let mut store = SqliteStore::open(&database)?;

            ui::status(Icons::PACKAGE, "Importing", &file.display().to_string());
            let text = std::fs::read_to_string(&file)?;
            let imported = repaso::import::import_sentences(&mut store, &text, deck.as_deref())?;

            ui::success(&format!("Imported {} sentences", imported));
            let stats = store.stats()?;
            println!(
                "{}",
                ui::dim(&format!(
                    "{} sentences total across {} decks",
                    stats.sentences, stats.decks
                ))
            );
        }

        Commands::Search { term, deck, database } => {
            let store = open_store(database)?;
            let queries = StudyQueries::new(&store);

            ui::status(Icons::SEARCH, "Searching for", &format!("'{}'", term));
            let results = queries.search(&term, deck.as_deref())?;

            if results.is_empty() {
                ui::empty("No sentences found.");
            } else {
                println!("{}", ui::sentence_table(&results));
                println!("{}", ui::dim(&format!("{} sentences", results.len())));
            }
        }

        Commands::Decks { database } => {
            let store = open_store(database)?;
            let queries = StudyQueries::new(&store);

            let names = queries.deck_names()?;
            if names.is_empty() {
                ui::empty("No decks found.");
            } else {
                println!("{} {} decks:", Icons::BOOKS, names.len());
                for name in names {
                    println!("- {}", name);
                }
            }
        }

        Commands::Study { command } => match command {
            StudyCommands::List { starred, database } => {
                let store = open_store(database)?;
                let queries = StudyQueries::new(&store);

                let cards = queries.study_deck(starred)?;
                if cards.is_empty() {
                    ui::empty("Study deck is empty.");
                } else {
                    println!("{} Study deck ({} cards):", Icons::CARDS, cards.len());
                    println!("{}", ui::study_table(&cards));
                }
            }

            StudyCommands::Add { sentence_id, database } => {
                let store = open_store(database)?;
                let queries = StudyQueries::new(&store);

                if store.sentence(sentence_id)?.is_none() {
                    ui::warn(&format!(
                        "Sentence {} is not in the corpus; the card stays hidden until it is imported",
                        sentence_id
                    ));
                }

                if queries.add_to_study_deck(sentence_id)? {
                    ui::success(&format!("Added sentence {} to the study deck", sentence_id));
                } else {
                    ui::info(&format!("Sentence {} is already in the study deck", sentence_id));
                }
            }

            StudyCommands::Remove { sentence_id, database } => {
                let store = open_store(database)?;
                let queries = StudyQueries::new(&store);

                queries.remove_from_study_deck(sentence_id)?;
                ui::success(&format!("Removed sentence {} from the study deck", sentence_id));
            }

            StudyCommands::Star { sentence_id, database } => {
                let store = open_store(database)?;
                let queries = StudyQueries::new(&store);

                queries.set_starred(sentence_id, true)?;
                ui::starred(&format!("Starred sentence {}", sentence_id));
            }

            StudyCommands::Unstar { sentence_id, database } => {
                let store = open_store(database)?;
                let queries = StudyQueries::new(&store);

                queries.set_starred(sentence_id, false)?;
                ui::success(&format!("Unstarred sentence {}", sentence_id));
            }
        },

        Commands::Stats { database } => {
            let database = resolve_database(database)?;
            let store = SqliteStore::open(&database)?;
            let stats = store.stats()?;

            println!("{} Repaso statistics ({})", Icons::STATS, database.display());

            let sentences = stats.sentences.to_string();
            let decks = stats.decks.to_string();
            let study_entries = stats.study_entries.to_string();
            let starred = stats.starred.to_string();
            println!(
                "{}",
                ui::stats_table(&[
                    ("Sentences", sentences.as_str()),
                    ("Decks", decks.as_str()),
                    ("Study entries", study_entries.as_str()),
                    ("Starred", starred.as_str()),
                ])
            );
        }
    }

    Ok(())
}
