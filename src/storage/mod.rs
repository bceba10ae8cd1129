//! Flat-file storage layer for study sets and notes.
//!
//! Each collection lives in one file, rewritten in full on every change.
//!
//! ## File Format
//!
//! One JSON object per line:
//!
//! ```text
//! {"id":0,"title":"Spanish","description":"Week 3","flashcards":[{"id":0,"term":"perro","definition":"dog","priority":1}],"date_created":"2025-04-08T14:03:22Z","date_accessed":"2025-04-09T09:15:00Z"}
//! ```
//!
//! Files in the older sentinel-line format (see [`legacy`]) are still read,
//! and are rewritten as JSON lines on the next save.
//!
//! ## Components
//!
//! - [`Store`]: loading, saving and validated CRUD for both collections
//! - [`jsonl`]: the JSON-lines record codec
//! - [`legacy`]: the sentinel-line codec
//! - [`detect_format`]: pick the codec for a file's content

pub mod jsonl;
pub mod legacy;
mod store;

pub use store::{Store, edit_flashcard};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseFormat {
    JsonLines,
    Legacy,
}

/// Legacy files start with a record header; anything else is JSON lines.
pub fn detect_format(content: &str) -> DatabaseFormat {
    let first = content.lines().map(str::trim).find(|line| !line.is_empty());
    match first {
        Some(legacy::SET_HEADER) | Some(legacy::NOTE_HEADER) => DatabaseFormat::Legacy,
        _ => DatabaseFormat::JsonLines,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_legacy() {
        let sets = format!("\n{}\nTitle\n", legacy::SET_HEADER);
        assert_eq!(detect_format(&sets), DatabaseFormat::Legacy);
        let notes = format!("{}\nTitle\n", legacy::NOTE_HEADER);
        assert_eq!(detect_format(&notes), DatabaseFormat::Legacy);
    }

    #[test]
    fn test_detect_json_lines() {
        assert_eq!(detect_format("{\"id\":1}\n"), DatabaseFormat::JsonLines);
        assert_eq!(detect_format(""), DatabaseFormat::JsonLines);
    }
}
