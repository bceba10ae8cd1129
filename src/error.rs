use thiserror::Error;

/// Rejected input for a set, note or flashcard.
///
/// The display strings are shown to users verbatim.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing Title")]
    MissingTitle,

    #[error("Need at least 1 flashcard")]
    NoFlashcards,

    #[error("Missing Term")]
    MissingTerm,

    #[error("Missing Definition")]
    MissingDefinition,
}

#[derive(Error, Debug)]
pub enum StudyError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Project already initialized at {0}")]
    AlreadyInitialized(String),
}

pub type Result<T> = std::result::Result<T, StudyError>;
