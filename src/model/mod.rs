//! Data models for flashstudy.
//!
//! - [`Flashcard`]: a term/definition pair with a study priority
//! - [`StudySet`]: an ordered, titled collection of flashcards
//! - [`Note`]: a titled free-text document with a derived word count
//! - [`StudySession`]: one shuffled pass over a study set

mod flashcard;
mod id;
mod note;
mod session;
mod study_set;

pub use flashcard::{DEFAULT_PRIORITY, Flashcard, FlashcardPatch, PRIORITIES};
pub use id::IdCounter;
pub use note::{Note, count_words};
pub use session::{Side, StudySession};
pub use study_set::StudySet;
