use super::flashcard::{Flashcard, FlashcardPatch};
use super::id::SET_IDS;
use chrono::{DateTime, Utc};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudySet {
    id: u64,
    title: String,
    #[serde(default)]
    description: String,
    flashcards: Vec<Flashcard>,
    date_created: DateTime<Utc>,
    date_accessed: DateTime<Utc>,
}

impl StudySet {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        flashcards: Vec<Flashcard>,
    ) -> Self {
        let now = Utc::now();
        Self::with_dates(title, description, flashcards, now, now)
    }

    /// Build a set whose timestamps come from storage.
    pub fn with_dates(
        title: impl Into<String>,
        description: impl Into<String>,
        flashcards: Vec<Flashcard>,
        date_created: DateTime<Utc>,
        date_accessed: DateTime<Utc>,
    ) -> Self {
        Self {
            id: SET_IDS.next(),
            title: title.into(),
            description: description.into(),
            flashcards,
            date_created,
            date_accessed,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn flashcards(&self) -> &[Flashcard] {
        &self.flashcards
    }

    pub fn len(&self) -> usize {
        self.flashcards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flashcards.is_empty()
    }

    pub fn date_created(&self) -> DateTime<Utc> {
        self.date_created
    }

    pub fn date_accessed(&self) -> DateTime<Utc> {
        self.date_accessed
    }

    pub fn flashcard(&self, id: u64) -> Option<&Flashcard> {
        self.flashcards.iter().find(|card| card.id() == id)
    }

    pub fn flashcard_mut(&mut self, id: u64) -> Option<&mut Flashcard> {
        self.flashcards.iter_mut().find(|card| card.id() == id)
    }

    pub fn update_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn update_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn replace_flashcards(&mut self, flashcards: Vec<Flashcard>) {
        self.flashcards = flashcards;
    }

    pub fn add_flashcard(&mut self, flashcard: Flashcard) {
        self.flashcards.push(flashcard);
    }

    /// Remove the card with `id`, returning it if it was present.
    pub fn remove_flashcard(&mut self, id: u64) -> Option<Flashcard> {
        let pos = self.flashcards.iter().position(|card| card.id() == id)?;
        Some(self.flashcards.remove(pos))
    }

    /// Apply `patch` to the card with `id`. Returns `false` if no such card.
    pub fn update_flashcard(&mut self, id: u64, patch: FlashcardPatch) -> bool {
        match self.flashcard_mut(id) {
            Some(card) => {
                patch.apply(card);
                true
            }
            None => false,
        }
    }

    pub fn update_date_accessed(&mut self) {
        self.date_accessed = Utc::now();
    }

    /// A study order for this set: priority 1 cards first, then 2, then
    /// everything else, shuffled within each tier. The stored order is
    /// left alone.
    pub fn shuffle_flashcards(&self) -> Vec<Flashcard> {
        self.shuffle_flashcards_with(&mut rand::rng())
    }

    pub fn shuffle_flashcards_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Flashcard> {
        let mut tiers: [Vec<Flashcard>; 3] = Default::default();
        for card in &self.flashcards {
            let tier = match card.priority() {
                1 => 0,
                2 => 1,
                _ => 2,
            };
            tiers[tier].push(card.clone());
        }

        let mut shuffled = Vec::with_capacity(self.flashcards.len());
        for mut tier in tiers {
            tier.shuffle(rng);
            shuffled.append(&mut tier);
        }
        shuffled
    }

    pub(crate) fn reserve_ids(&self) {
        SET_IDS.observe(self.id);
        for card in &self.flashcards {
            card.reserve_id();
        }
    }
}
