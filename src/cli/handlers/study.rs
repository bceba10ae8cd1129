use crate::model::{Side, StudySession, StudySet};
use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};

use super::utils::{confirm, format_priority};

/// Drive a study session over line-based input.
///
/// Enter (or `f`) flips the card, `n` moves on, `q` quits. At the end of
/// the deck the user can go again with a fresh shuffle.
pub fn run_session<R: BufRead, W: Write>(
    set: &StudySet,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    let mut session = StudySession::new(set);
    writeln!(
        output,
        "Studying {} ({} cards). Enter flips, n for next, q to quit.",
        session.title().bold(),
        set.len()
    )?;

    loop {
        if session.is_finished() {
            writeln!(output, "Reached end of set")?;
            if confirm("Again?", input, output)? {
                session.restart(set);
                continue;
            }
            break;
        }

        show_card(&session, output)?;
        write!(output, "> ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            break;
        }
        match line.trim() {
            "" | "f" => {
                session.flip();
            }
            "n" => {
                session.advance();
            }
            "q" => break,
            other => writeln!(output, "Unknown command '{}'", other)?,
        }
    }
    Ok(())
}

fn show_card<W: Write>(session: &StudySession, output: &mut W) -> Result<()> {
    let (Some(card), Some(face)) = (session.current(), session.face()) else {
        return Ok(());
    };
    let (position, total) = session.progress();
    let label = match session.side() {
        Side::Term => "Term",
        Side::Definition => "Definition",
    };
    writeln!(
        output,
        "[{} / {}] {} {}: {}",
        position,
        total,
        format_priority(card.priority()),
        label.dimmed(),
        face
    )?;
    Ok(())
}
