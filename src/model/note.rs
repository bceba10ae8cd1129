use super::id::NOTE_IDS;
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static NON_WORD_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9\s]").unwrap());

/// Count words the way the note editor always has: punctuation becomes a
/// separator, then whitespace-delimited tokens are counted.
///
/// Empty or all-whitespace text counts as one word.
pub fn count_words(text: &str) -> usize {
    let cleaned = NON_WORD_CHARS.replace_all(text, " ");
    let trimmed = cleaned.trim();
    if trimmed.is_empty() {
        return 1;
    }
    trimmed.split_whitespace().count()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "NoteRecord")]
pub struct Note {
    id: u64,
    title: String,
    description: String,
    text: String,
    #[serde(skip_serializing)]
    word_count: usize,
    date_created: DateTime<Utc>,
    date_accessed: DateTime<Utc>,
}

/// On-disk shape of a note; the word count is derived on load.
#[derive(Deserialize)]
struct NoteRecord {
    id: u64,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    text: String,
    date_created: DateTime<Utc>,
    date_accessed: DateTime<Utc>,
}

impl From<NoteRecord> for Note {
    fn from(record: NoteRecord) -> Self {
        let word_count = count_words(&record.text);
        Self {
            id: record.id,
            title: record.title,
            description: record.description,
            text: record.text,
            word_count,
            date_created: record.date_created,
            date_accessed: record.date_accessed,
        }
    }
}

impl Note {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self::with_dates(title, description, text, now, now)
    }

    /// Build a note whose timestamps come from storage.
    pub fn with_dates(
        title: impl Into<String>,
        description: impl Into<String>,
        text: impl Into<String>,
        date_created: DateTime<Utc>,
        date_accessed: DateTime<Utc>,
    ) -> Self {
        let text = text.into();
        Self {
            id: NOTE_IDS.next(),
            title: title.into(),
            description: description.into(),
            word_count: count_words(&text),
            text,
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

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn date_created(&self) -> DateTime<Utc> {
        self.date_created
    }

    pub fn date_accessed(&self) -> DateTime<Utc> {
        self.date_accessed
    }

    pub fn update_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn update_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn update_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.word_count = count_words(&self.text);
    }

    pub fn update_date_accessed(&mut self) {
        self.date_accessed = Utc::now();
    }

    pub(crate) fn reserve_id(&self) {
        NOTE_IDS.observe(self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_words_ignores_punctuation() {
        assert_eq!(count_words("Hello, world! 123"), 3);
        assert_eq!(count_words("don't stop"), 3);
        assert_eq!(count_words("  spaced\n\tout  words "), 3);
    }

    #[test]
    fn test_count_words_empty_text_is_one() {
        assert_eq!(count_words(""), 1);
        assert_eq!(count_words("   \n "), 1);
        assert_eq!(count_words("?!..."), 1);
    }

    #[test]
    fn test_update_text_recomputes_word_count() {
        let mut note = Note::new("Title", "", "one two");
        assert_eq!(note.word_count(), 2);

        note.update_text("Hello, world! 123");
        assert_eq!(note.word_count(), 3);

        note.update_text("");
        assert_eq!(note.word_count(), 1);
    }

    #[test]
    fn test_new_note_dates_match() {
        let note = Note::new("Title", "Desc", "Body");
        assert_eq!(note.date_created(), note.date_accessed());
    }

    #[test]
    fn test_update_date_accessed_keeps_created() {
        let mut note = Note::new("Title", "Desc", "Body");
        let created = note.date_created();
        note.update_date_accessed();
        assert_eq!(note.date_created(), created);
        assert!(note.date_accessed() >= created);
    }

    #[test]
    fn test_deserialize_derives_word_count() {
        let json = r#"{"id":7,"title":"T","description":"","text":"a b c d","date_created":"2025-04-08T14:03:22Z","date_accessed":"2025-04-09T08:00:00Z"}"#;
        let note: Note = serde_json::from_str(json).unwrap();
        assert_eq!(note.id(), 7);
        assert_eq!(note.word_count(), 4);
    }

    #[test]
    fn test_serialize_omits_word_count() {
        let note = Note::new("T", "D", "some text");
        let json = serde_json::to_string(&note).unwrap();
        assert!(!json.contains("word_count"));
        assert!(json.contains("\"text\":\"some text\""));
    }
}
