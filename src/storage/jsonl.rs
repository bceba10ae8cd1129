use crate::error::{Result, StudyError};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Parse one record per line. Blank lines are skipped.
pub fn parse_records<T: DeserializeOwned>(content: &str) -> Result<Vec<T>> {
    let mut records = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let record = serde_json::from_str(line)
            .map_err(|e| StudyError::Parse(format!("line {}: {}", idx + 1, e)))?;
        records.push(record);
    }
    Ok(records)
}

pub fn render_records<T: Serialize>(records: &[T]) -> Result<String> {
    let mut output = String::new();
    for record in records {
        output.push_str(&serde_json::to_string(record)?);
        output.push('\n');
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Flashcard, Note, StudySet};

    #[test]
    fn test_roundtrip_sets() {
        let sets = vec![
            StudySet::new(
                "Chemistry",
                "Unit 1",
                vec![
                    Flashcard::new("H", "Hydrogen", 1),
                    Flashcard::new("He", "Helium", 3),
                ],
            ),
            StudySet::new("Empty description", "", vec![Flashcard::new("a", "b", 2)]),
        ];

        let rendered = render_records(&sets).unwrap();
        assert_eq!(rendered.lines().count(), 2);

        let parsed: Vec<StudySet> = parse_records(&rendered).unwrap();
        assert_eq!(parsed, sets);
    }

    #[test]
    fn test_roundtrip_survives_marker_text_and_newlines() {
        let notes = vec![Note::new(
            "TextEnd:",
            "FlashcardStart:\nsecond line",
            "Title;Description;Text;DateCreated;DateAccessed\nTextEnd:\n",
        )];

        let rendered = render_records(&notes).unwrap();
        assert_eq!(rendered.lines().count(), 1);

        let parsed: Vec<Note> = parse_records(&rendered).unwrap();
        assert_eq!(parsed, notes);
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let note = Note::new("T", "D", "body");
        let line = serde_json::to_string(&note).unwrap();
        let content = format!("\n{}\n\n   \n", line);
        let parsed: Vec<Note> = parse_records(&content).unwrap();
        assert_eq!(parsed.len(), 1);
    }

    #[test]
    fn test_parse_error_reports_line_number() {
        let note = Note::new("T", "D", "body");
        let line = serde_json::to_string(&note).unwrap();
        let content = format!("{}\n{{not json\n", line);

        let err = parse_records::<Note>(&content).unwrap_err();
        assert!(matches!(err, StudyError::Parse(_)));
        assert!(err.to_string().contains("line 2"));
    }
}
