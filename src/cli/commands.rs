use crate::model::{DEFAULT_PRIORITY, PRIORITIES};
use crate::validation;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "flashstudy")]
#[command(author, version, about = "A flat-file study aid for flashcard sets and notes")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding the database files, relative to the config (overrides it)
    #[arg(long, global = true, env = "FLASHSTUDY_DATA_DIR")]
    pub data_dir: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a .flashstudy.yml in the current directory
    ///
    /// The global --data-dir becomes the stored database directory.
    Init,

    /// Manage study sets
    #[command(subcommand)]
    Set(SetCommand),

    /// Manage notes
    #[command(subcommand)]
    Note(NoteCommand),

    /// Flashcard helpers
    #[command(subcommand)]
    Card(CardCommand),

    /// Append records from sentinel-format database files
    ImportLegacy {
        /// Study set file in the legacy format
        #[arg(long)]
        sets: Option<PathBuf>,

        /// Note file in the legacy format
        #[arg(long)]
        notes: Option<PathBuf>,
    },

    /// Write both collections in the legacy sentinel format
    ExportLegacy {
        /// Target directory
        dir: PathBuf,
    },
}

#[derive(Subcommand)]
pub enum SetCommand {
    /// List all study sets
    #[command(visible_alias = "ls")]
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a set and its cards
    Show {
        /// Set ID
        id: u64,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a new study set
    #[command(visible_alias = "new")]
    Create {
        /// Title of the set
        title: String,

        /// Description
        #[arg(short, long, default_value = "")]
        description: String,

        /// A card as TERM::DEFINITION[::PRIORITY] (repeatable)
        #[arg(short, long = "card", value_parser = parse_card)]
        cards: Vec<CardArg>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Edit a set's title, description or cards
    Edit {
        /// Set ID
        id: u64,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New description (pass "" to clear)
        #[arg(short, long)]
        description: Option<String>,

        /// Replace all cards with these (repeatable)
        #[arg(short, long = "card", value_parser = parse_card)]
        cards: Vec<CardArg>,
    },

    /// Update a single card in a set
    Card {
        /// Set ID
        set_id: u64,

        /// Card ID
        card_id: u64,

        /// New term
        #[arg(long)]
        term: Option<String>,

        /// New definition
        #[arg(long)]
        definition: Option<String>,

        /// New priority
        #[arg(short, long, value_parser = parse_priority)]
        priority: Option<i32>,
    },

    /// Append one card to a set
    AddCard {
        /// Set ID
        set_id: u64,

        /// Term
        term: String,

        /// Definition
        definition: String,

        /// Priority
        #[arg(short, long, default_value_t = DEFAULT_PRIORITY, value_parser = parse_priority)]
        priority: i32,
    },

    /// Remove one card from a set (a set keeps at least one card)
    RmCard {
        /// Set ID
        set_id: u64,

        /// Card ID
        card_id: u64,
    },

    /// Delete a study set
    #[command(visible_alias = "rm")]
    Delete {
        /// Set ID
        id: u64,

        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },

    /// Study a set: priority 1 cards first, shuffled within each priority
    Study {
        /// Set ID
        id: u64,
    },
}

#[derive(Subcommand)]
pub enum NoteCommand {
    /// List all notes
    #[command(visible_alias = "ls")]
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a note
    Show {
        /// Note ID
        id: u64,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a new note
    #[command(visible_alias = "new")]
    Create {
        /// Title of the note
        title: String,

        /// Description
        #[arg(short, long, default_value = "")]
        description: String,

        /// Note text (use '-' to read from stdin)
        #[arg(short, long)]
        text: Option<String>,

        /// Read note text from a file
        #[arg(long, conflicts_with = "text")]
        text_file: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Edit a note's title, description or text
    Edit {
        /// Note ID
        id: u64,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New description (pass "" to clear)
        #[arg(short, long)]
        description: Option<String>,

        /// New text (use '-' to read from stdin)
        #[arg(short, long)]
        text: Option<String>,

        /// Read new text from a file
        #[arg(long, conflicts_with = "text")]
        text_file: Option<PathBuf>,
    },

    /// Delete a note
    #[command(visible_alias = "rm")]
    Delete {
        /// Note ID
        id: u64,

        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum CardCommand {
    /// Check that a card has both a term and a definition
    Validate {
        /// Term
        term: String,

        /// Definition
        definition: String,
    },
}

/// A flashcard given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardArg {
    pub term: String,
    pub definition: String,
    pub priority: i32,
}

const CARD_SEPARATOR: &str = "::";

/// Parse a priority, accepting only the values in [`PRIORITIES`].
pub fn parse_priority(value: &str) -> Result<i32, String> {
    value
        .trim()
        .parse::<i32>()
        .ok()
        .filter(|p| PRIORITIES.contains(p))
        .ok_or_else(|| format!("priority must be one of {:?}, got '{}'", PRIORITIES, value))
}

/// Parse `TERM::DEFINITION[::PRIORITY]`.
pub fn parse_card(value: &str) -> Result<CardArg, String> {
    let parts: Vec<&str> = value.split(CARD_SEPARATOR).collect();
    let (term, definition, priority) = match parts.as_slice() {
        [term, definition] => (*term, *definition, DEFAULT_PRIORITY),
        [term, definition, priority] => {
            (*term, *definition, parse_priority(priority)?)
        }
        _ => {
            return Err(format!(
                "expected TERM{sep}DEFINITION[{sep}PRIORITY], got '{}'",
                value,
                sep = CARD_SEPARATOR
            ));
        }
    };

    validation::valid_flashcard(term, definition).map_err(|e| e.to_string())?;

    Ok(CardArg {
        term: term.to_string(),
        definition: definition.to_string(),
        priority,
    })
}
