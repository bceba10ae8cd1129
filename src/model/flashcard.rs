use super::id::FLASHCARD_IDS;
use serde::{Deserialize, Serialize};

/// Priorities offered by editors. Lower numbers are studied first.
pub const PRIORITIES: [i32; 3] = [1, 2, 3];

/// Priority preselected when a new card is drafted.
pub const DEFAULT_PRIORITY: i32 = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    id: u64,
    term: String,
    definition: String,
    priority: i32,
}

impl Flashcard {
    pub fn new(term: impl Into<String>, definition: impl Into<String>, priority: i32) -> Self {
        Self {
            id: FLASHCARD_IDS.next(),
            term: term.into(),
            definition: definition.into(),
            priority,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn definition(&self) -> &str {
        &self.definition
    }

    pub fn priority(&self) -> i32 {
        self.priority
    }

    pub fn set_term(&mut self, term: impl Into<String>) {
        self.term = term.into();
    }

    pub fn set_definition(&mut self, definition: impl Into<String>) {
        self.definition = definition.into();
    }

    pub fn set_priority(&mut self, priority: i32) {
        self.priority = priority;
    }

    pub(crate) fn reserve_id(&self) {
        FLASHCARD_IDS.observe(self.id);
    }
}

/// Partial update for a stored flashcard.
///
/// Empty strings count as "leave unchanged", same as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlashcardPatch {
    pub term: Option<String>,
    pub definition: Option<String>,
    pub priority: Option<i32>,
}

impl FlashcardPatch {
    pub fn apply(self, card: &mut Flashcard) {
        if let Some(term) = self.term.filter(|t| !t.is_empty()) {
            card.set_term(term);
        }
        if let Some(definition) = self.definition.filter(|d| !d.is_empty()) {
            card.set_definition(definition);
        }
        if let Some(priority) = self.priority {
            card.set_priority(priority);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.term.as_deref().is_none_or(str::is_empty)
            && self.definition.as_deref().is_none_or(str::is_empty)
            && self.priority.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cards_get_distinct_ids() {
        let a = Flashcard::new("a", "b", 1);
        let b = Flashcard::new("a", "b", 1);
        assert_ne!(a.id(), b.id());
        assert!(b.id() > a.id());
    }

    #[test]
    fn test_patch_skips_empty_and_missing_fields() {
        let mut card = Flashcard::new("term", "definition", 2);
        FlashcardPatch {
            term: Some(String::new()),
            definition: None,
            priority: Some(1),
        }
        .apply(&mut card);

        assert_eq!(card.term(), "term");
        assert_eq!(card.definition(), "definition");
        assert_eq!(card.priority(), 1);
    }

    #[test]
    fn test_patch_overwrites_present_fields() {
        let mut card = Flashcard::new("term", "definition", 2);
        let id = card.id();
        FlashcardPatch {
            term: Some("new term".to_string()),
            definition: Some("new definition".to_string()),
            priority: None,
        }
        .apply(&mut card);

        assert_eq!(card.term(), "new term");
        assert_eq!(card.definition(), "new definition");
        assert_eq!(card.priority(), 2);
        assert_eq!(card.id(), id);
    }

    #[test]
    fn test_patch_is_empty() {
        assert!(FlashcardPatch::default().is_empty());
        assert!(
            FlashcardPatch {
                term: Some(String::new()),
                ..Default::default()
            }
            .is_empty()
        );
        assert!(
            !FlashcardPatch {
                priority: Some(3),
                ..Default::default()
            }
            .is_empty()
        );
    }
}
