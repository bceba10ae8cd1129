use crate::cli::commands::NoteCommand;
use anyhow::Result;
use colored::Colorize;
use std::io;

use super::CommandContext;
use super::utils::{confirm, print_note, print_note_list, resolve_text};

pub fn handle_note(ctx: &mut CommandContext, command: NoteCommand) -> Result<()> {
    match command {
        NoteCommand::List { json } => {
            let notes = ctx.store.notes();
            if json {
                println!("{}", serde_json::to_string_pretty(notes)?);
            } else {
                print_note_list(notes);
            }
            Ok(())
        }
        NoteCommand::Show { id, json } => {
            ctx.store.touch_note(id)?;
            let note = ctx.store.note(id)?;
            if json {
                println!("{}", serde_json::to_string_pretty(note)?);
            } else {
                print_note(note);
            }
            Ok(())
        }
        NoteCommand::Create {
            title,
            description,
            text,
            text_file,
            json,
        } => {
            let text = resolve_text(text, text_file)?.unwrap_or_default();
            let id = ctx.store.add_note(&title, &description, &text)?;
            let note = ctx.store.note(id)?;
            if json {
                println!("{}", serde_json::to_string_pretty(note)?);
            } else {
                println!(
                    "{} {} {} ({} words)",
                    "Created".green(),
                    id.to_string().cyan(),
                    note.title(),
                    note.word_count()
                );
            }
            Ok(())
        }
        NoteCommand::Edit {
            id,
            title,
            description,
            text,
            text_file,
        } => {
            let current = ctx.store.note(id)?;
            let title = title.unwrap_or_else(|| current.title().to_string());
            let description = description.unwrap_or_else(|| current.description().to_string());
            let text = match resolve_text(text, text_file)? {
                Some(t) => t,
                None => current.text().to_string(),
            };

            ctx.store.edit_note(id, &title, &description, &text)?;
            println!("{} {} {}", "Updated".green(), id.to_string().cyan(), title);
            Ok(())
        }
        NoteCommand::Delete { id, force } => {
            let title = ctx.store.note(id)?.title().to_string();
            if !force {
                let prompt = format!("Delete note {} ({}) permanently?", id, title);
                if !confirm(&prompt, &mut io::stdin().lock(), &mut io::stdout())? {
                    println!("Cancelled.");
                    return Ok(());
                }
            }
            ctx.store.delete_note(id)?;
            println!("{} {} {}", "Deleted".red(), id.to_string().cyan(), title);
            Ok(())
        }
    }
}
