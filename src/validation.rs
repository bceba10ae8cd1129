//! Input validation for sets, notes and flashcards.

use crate::error::ValidationError;
use crate::model::Flashcard;

/// Validates a set or note title.
pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::MissingTitle);
    }
    Ok(())
}

/// Validates that a set has something to study.
pub fn validate_flashcards(flashcards: &[Flashcard]) -> Result<(), ValidationError> {
    if flashcards.is_empty() {
        return Err(ValidationError::NoFlashcards);
    }
    Ok(())
}

/// Validates a complete set: title first, then cards.
pub fn validate_set(title: &str, flashcards: &[Flashcard]) -> Result<(), ValidationError> {
    validate_title(title)?;
    validate_flashcards(flashcards)
}

/// Checks a flashcard draft. A blank term is reported before a blank
/// definition.
pub fn valid_flashcard(term: &str, definition: &str) -> Result<(), ValidationError> {
    if term.trim().is_empty() {
        return Err(ValidationError::MissingTerm);
    }
    if definition.trim().is_empty() {
        return Err(ValidationError::MissingDefinition);
    }
    Ok(())
}
