//! Reader and writer for the original sentinel-line database files.
//!
//! Each record starts with a header line, followed by title, description,
//! a bracketed body and two timestamps. Nothing is escaped, so a value
//! that equals a marker or contains a newline cannot be represented.

use crate::error::{Result, StudyError};
use crate::model::{Flashcard, Note, StudySet};
use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};

pub const SET_HEADER: &str = "Title;Description;Flashcards;DateCreated;DateAccessed";
pub const NOTE_HEADER: &str = "Title;Description;Text;DateCreated;DateAccessed";

const FLASHCARD_START: &str = "FlashcardStart:";
const FLASHCARD_END: &str = "FlashcardEnd:";
const TEXT_START: &str = "TextStart:";
const TEXT_END: &str = "TextEnd:";

const PARSE_DATE_FORMAT: &str = "%a %b %d %H:%M:%S %Y";
const RENDER_DATE_FORMAT: &str = "%a %b %d %H:%M:%S UTC %Y";

/// Line cursor that remembers where it is for error messages.
struct Cursor<'a> {
    lines: std::iter::Enumerate<std::str::Lines<'a>>,
    line_no: usize,
}

impl<'a> Cursor<'a> {
    fn new(content: &'a str) -> Self {
        Self {
            lines: content.lines().enumerate(),
            line_no: 0,
        }
    }

    fn next_line(&mut self) -> Option<&'a str> {
        let (idx, line) = self.lines.next()?;
        self.line_no = idx + 1;
        Some(line)
    }

    fn expect(&mut self, what: &str) -> Result<&'a str> {
        self.next_line().ok_or_else(|| {
            StudyError::Parse(format!(
                "unexpected end of file after line {}, expected {}",
                self.line_no, what
            ))
        })
    }

    fn date(&mut self, what: &str) -> Result<DateTime<Utc>> {
        let line = self.expect(what)?;
        parse_date(line).ok_or_else(|| {
            StudyError::Parse(format!("line {}: invalid {} '{}'", self.line_no, what, line))
        })
    }
}

/// Parse a timestamp like `Tue Apr 08 14:03:22 PDT 2025`.
///
/// Known zone abbreviations are applied as fixed offsets. An unknown or
/// missing zone reads the wall-clock time as UTC.
pub fn parse_date(text: &str) -> Option<DateTime<Utc>> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let (weekday, month, day, time, zone, year) = match tokens.as_slice() {
        [weekday, month, day, time, zone, year] => (weekday, month, day, time, Some(*zone), year),
        [weekday, month, day, time, year] => (weekday, month, day, time, None, year),
        _ => return None,
    };
    let without_zone = format!("{} {} {} {} {}", weekday, month, day, time, year);
    let naive = NaiveDateTime::parse_from_str(&without_zone, PARSE_DATE_FORMAT).ok()?;

    let offset_hours = zone.and_then(zone_offset_hours).unwrap_or(0);
    let offset = FixedOffset::east_opt(offset_hours * 3600)?;
    naive
        .and_local_timezone(offset)
        .single()
        .map(|date| date.with_timezone(&Utc))
}

/// UTC offsets for the zone abbreviations `java.util.Date` prints.
fn zone_offset_hours(zone: &str) -> Option<i32> {
    let hours = match zone {
        "UTC" | "GMT" | "UT" | "Z" => 0,
        "EST" => -5,
        "EDT" => -4,
        "CST" => -6,
        "CDT" => -5,
        "MST" => -7,
        "MDT" => -6,
        "PST" => -8,
        "PDT" => -7,
        "AKST" => -9,
        "AKDT" => -8,
        "HST" => -10,
        "BST" => 1,
        "CET" => 1,
        "CEST" => 2,
        "EET" => 2,
        "EEST" => 3,
        "IST" => 5,
        "JST" => 9,
        "KST" => 9,
        _ => return None,
    };
    Some(hours)
}

pub fn render_date(date: &DateTime<Utc>) -> String {
    date.format(RENDER_DATE_FORMAT).to_string()
}

pub fn parse_sets(content: &str) -> Result<Vec<StudySet>> {
    let mut cursor = Cursor::new(content);
    let mut sets = Vec::new();

    while let Some(line) = cursor.next_line() {
        if line.trim() != SET_HEADER {
            continue;
        }

        let title = cursor.expect("title")?;
        let description = cursor.expect("description")?;
        cursor.expect(FLASHCARD_START)?;

        let mut flashcards = Vec::new();
        let mut line = cursor.expect("term or FlashcardEnd:")?;
        while line != FLASHCARD_END {
            let term = line;
            let definition = cursor.expect("definition")?;
            let priority_text = cursor.expect("priority")?;
            let priority = priority_text.trim().parse::<i32>().map_err(|_| {
                StudyError::Parse(format!(
                    "line {}: invalid priority '{}'",
                    cursor.line_no, priority_text
                ))
            })?;
            flashcards.push(Flashcard::new(term, definition, priority));
            line = cursor.expect("term or FlashcardEnd:")?;
        }

        let date_created = cursor.date("creation date")?;
        let date_accessed = cursor.date("access date")?;

        sets.push(StudySet::with_dates(
            title,
            description,
            flashcards,
            date_created,
            date_accessed,
        ));
    }

    Ok(sets)
}

pub fn render_sets(sets: &[StudySet]) -> String {
    let mut output = String::new();
    for set in sets {
        output.push_str(SET_HEADER);
        output.push('\n');
        push_line(&mut output, set.title());
        push_line(&mut output, set.description());
        push_line(&mut output, FLASHCARD_START);
        for card in set.flashcards() {
            push_line(&mut output, card.term());
            push_line(&mut output, card.definition());
            push_line(&mut output, &card.priority().to_string());
        }
        push_line(&mut output, FLASHCARD_END);
        push_line(&mut output, &render_date(&set.date_created()));
        push_line(&mut output, &render_date(&set.date_accessed()));
        output.push('\n');
    }
    output
}

pub fn parse_notes(content: &str) -> Result<Vec<Note>> {
    let mut cursor = Cursor::new(content);
    let mut notes = Vec::new();

    while let Some(line) = cursor.next_line() {
        if line.trim() != NOTE_HEADER {
            continue;
        }

        let title = cursor.expect("title")?;
        let description = cursor.expect("description")?;
        cursor.expect(TEXT_START)?;

        let mut body: Vec<&str> = Vec::new();
        let mut line = cursor.expect("text or TextEnd:")?;
        while line != TEXT_END {
            body.push(line);
            line = cursor.expect("text or TextEnd:")?;
        }

        let date_created = cursor.date("creation date")?;
        let date_accessed = cursor.date("access date")?;

        notes.push(Note::with_dates(
            title,
            description,
            body.join("\n"),
            date_created,
            date_accessed,
        ));
    }

    Ok(notes)
}

pub fn render_notes(notes: &[Note]) -> String {
    let mut output = String::new();
    for note in notes {
        output.push_str(NOTE_HEADER);
        output.push('\n');
        push_line(&mut output, note.title());
        push_line(&mut output, note.description());
        push_line(&mut output, TEXT_START);
        push_line(&mut output, note.text());
        push_line(&mut output, TEXT_END);
        push_line(&mut output, &render_date(&note.date_created()));
        push_line(&mut output, &render_date(&note.date_accessed()));
        output.push('\n');
    }
    output
}

fn push_line(output: &mut String, line: &str) {
    output.push_str(line);
    output.push('\n');
}
