use crate::model::{Flashcard, Note, StudySet};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, BufRead, Read, Write};
use std::path::PathBuf;

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Resolve note text from CLI arg, file, or stdin
pub fn resolve_text(text: Option<String>, text_file: Option<PathBuf>) -> Result<Option<String>> {
    if let Some(t) = text {
        if t == "-" {
            let mut content = String::new();
            io::stdin().read_to_string(&mut content)?;
            return Ok(Some(content.trim_end().to_string()));
        }
        return Ok(Some(t));
    }
    if let Some(path) = text_file {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read text from {}", path.display()))?;
        return Ok(Some(content.trim_end().to_string()));
    }
    Ok(None)
}

/// Ask a yes/no question; anything but "y" is a no.
pub fn confirm<R: BufRead, W: Write>(prompt: &str, input: &mut R, output: &mut W) -> Result<bool> {
    write!(output, "{} [y/N] ", prompt)?;
    output.flush()?;
    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}

/// Format priority with color coding
pub fn format_priority(priority: i32) -> colored::ColoredString {
    let label = format!("P{}", priority);
    match priority {
        1 => label.red().bold(),
        2 => label.yellow(),
        _ => label.dimmed(),
    }
}

pub fn print_set(set: &StudySet) {
    println!(
        "{} {}",
        set.id().to_string().cyan().bold(),
        set.title().bold()
    );
    if !set.description().is_empty() {
        println!("Description: {}", set.description());
    }
    println!("Cards:       {}", set.len());
    println!(
        "Created:     {}",
        set.date_created().format(DATE_FORMAT).to_string().dimmed()
    );
    println!(
        "Accessed:    {}",
        set.date_accessed().format(DATE_FORMAT).to_string().dimmed()
    );
    println!();
    print_flashcards(set.flashcards());
}

pub fn print_flashcards(cards: &[Flashcard]) {
    for card in cards {
        println!(
            "  {} {} {} {} {}",
            card.id().to_string().cyan(),
            format_priority(card.priority()),
            card.term().bold(),
            "::".dimmed(),
            card.definition()
        );
    }
}

/// Print a list of sets (compact format)
pub fn print_set_list(sets: &[StudySet]) {
    if sets.is_empty() {
        println!("No study sets found.");
        return;
    }

    for set in sets {
        println!(
            "{} {} {} ({} cards)",
            set.id().to_string().cyan(),
            set.date_accessed().format(DATE_FORMAT).to_string().dimmed(),
            set.title(),
            set.len()
        );
    }
}

pub fn print_note(note: &Note) {
    println!(
        "{} {}",
        note.id().to_string().cyan().bold(),
        note.title().bold()
    );
    if !note.description().is_empty() {
        println!("Description: {}", note.description());
    }
    println!("Words:       {}", note.word_count());
    println!(
        "Created:     {}",
        note.date_created().format(DATE_FORMAT).to_string().dimmed()
    );
    println!(
        "Accessed:    {}",
        note.date_accessed().format(DATE_FORMAT).to_string().dimmed()
    );

    if !note.text().is_empty() {
        println!();
        println!("{}", note.text());
    }
}

/// Print a list of notes (compact format)
pub fn print_note_list(notes: &[Note]) {
    if notes.is_empty() {
        println!("No notes found.");
        return;
    }

    for note in notes {
        println!(
            "{} {} {} ({} words)",
            note.id().to_string().cyan(),
            note.date_accessed().format(DATE_FORMAT).to_string().dimmed(),
            note.title(),
            note.word_count()
        );
    }
}
