use super::flashcard::Flashcard;
use super::study_set::StudySet;

/// Which face of the current card is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Term,
    Definition,
}

/// One pass over a set in shuffled order.
///
/// The session owns its own copy of the cards, so edits to the set while
/// studying do not shift the deck underneath the user.
#[derive(Debug, Clone)]
pub struct StudySession {
    title: String,
    deck: Vec<Flashcard>,
    position: usize,
    side: Side,
}

impl StudySession {
    pub fn new(set: &StudySet) -> Self {
        Self::from_deck(set.title(), set.shuffle_flashcards())
    }

    /// Start a session over an already ordered deck.
    pub fn from_deck(title: impl Into<String>, deck: Vec<Flashcard>) -> Self {
        Self {
            title: title.into(),
            deck,
            position: 0,
            side: Side::Term,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn current(&self) -> Option<&Flashcard> {
        self.deck.get(self.position)
    }

    pub fn side(&self) -> Side {
        self.side
    }

    /// Text on the visible face of the current card.
    pub fn face(&self) -> Option<&str> {
        let card = self.current()?;
        Some(match self.side {
            Side::Term => card.term(),
            Side::Definition => card.definition(),
        })
    }

    pub fn flip(&mut self) -> Side {
        self.side = match self.side {
            Side::Term => Side::Definition,
            Side::Definition => Side::Term,
        };
        self.side
    }

    /// Move to the next card, term side up. Returns `false` once the deck
    /// is exhausted.
    pub fn advance(&mut self) -> bool {
        if self.position < self.deck.len() {
            self.position += 1;
        }
        self.side = Side::Term;
        self.position < self.deck.len()
    }

    /// 1-based position of the current card and the deck size.
    pub fn progress(&self) -> (usize, usize) {
        ((self.position + 1).min(self.deck.len()), self.deck.len())
    }

    pub fn is_finished(&self) -> bool {
        self.position >= self.deck.len()
    }

    /// Reshuffle from `set` and start over.
    pub fn restart(&mut self, set: &StudySet) {
        *self = Self::new(set);
    }
}
