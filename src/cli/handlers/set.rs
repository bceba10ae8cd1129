use crate::cli::commands::{CardArg, SetCommand};
use crate::model::{Flashcard, FlashcardPatch};
use anyhow::Result;
use colored::Colorize;
use std::io;

use super::CommandContext;
use super::study::run_session;
use super::utils::{confirm, print_set, print_set_list};

pub fn handle_set(ctx: &mut CommandContext, command: SetCommand) -> Result<()> {
    match command {
        SetCommand::List { json } => {
            let sets = ctx.store.sets();
            if json {
                println!("{}", serde_json::to_string_pretty(sets)?);
            } else {
                print_set_list(sets);
            }
            Ok(())
        }
        SetCommand::Show { id, json } => {
            ctx.store.touch_set(id)?;
            let set = ctx.store.set(id)?;
            if json {
                println!("{}", serde_json::to_string_pretty(set)?);
            } else {
                print_set(set);
            }
            Ok(())
        }
        SetCommand::Create {
            title,
            description,
            cards,
            json,
        } => {
            let id = ctx.store.add_set(&title, &description, into_flashcards(cards))?;
            let set = ctx.store.set(id)?;
            if json {
                println!("{}", serde_json::to_string_pretty(set)?);
            } else {
                println!(
                    "{} {} {} ({} cards)",
                    "Created".green(),
                    id.to_string().cyan(),
                    set.title(),
                    set.len()
                );
            }
            Ok(())
        }
        SetCommand::Edit {
            id,
            title,
            description,
            cards,
        } => {
            let current = ctx.store.set(id)?;
            let title = title.unwrap_or_else(|| current.title().to_string());
            let description = description.unwrap_or_else(|| current.description().to_string());
            let flashcards = if cards.is_empty() {
                current.flashcards().to_vec()
            } else {
                into_flashcards(cards)
            };

            ctx.store.edit_set(id, &title, &description, flashcards)?;
            println!("{} {} {}", "Updated".green(), id.to_string().cyan(), title);
            Ok(())
        }
        SetCommand::Card {
            set_id,
            card_id,
            term,
            definition,
            priority,
        } => {
            let patch = FlashcardPatch {
                term,
                definition,
                priority,
            };
            if patch.is_empty() {
                println!("Nothing to update.");
                return Ok(());
            }
            ctx.store.update_flashcard(set_id, card_id, patch)?;
            println!(
                "{} card {} in set {}",
                "Updated".green(),
                card_id.to_string().cyan(),
                set_id.to_string().cyan()
            );
            Ok(())
        }
        SetCommand::AddCard {
            set_id,
            term,
            definition,
            priority,
        } => {
            let card_id = ctx.store.add_flashcard(set_id, &term, &definition, priority)?;
            println!(
                "{} card {} to set {}",
                "Added".green(),
                card_id.to_string().cyan(),
                set_id.to_string().cyan()
            );
            Ok(())
        }
        SetCommand::RmCard { set_id, card_id } => {
            let removed = ctx.store.remove_flashcard(set_id, card_id)?;
            println!(
                "{} card {} ({}) from set {}",
                "Removed".red(),
                card_id.to_string().cyan(),
                removed.term(),
                set_id.to_string().cyan()
            );
            Ok(())
        }
        SetCommand::Delete { id, force } => {
            let title = ctx.store.set(id)?.title().to_string();
            if !force {
                let prompt = format!("Delete set {} ({}) permanently?", id, title);
                if !confirm(&prompt, &mut io::stdin().lock(), &mut io::stdout())? {
                    println!("Cancelled.");
                    return Ok(());
                }
            }
            ctx.store.delete_set(id)?;
            println!("{} {} {}", "Deleted".red(), id.to_string().cyan(), title);
            Ok(())
        }
        SetCommand::Study { id } => {
            ctx.store.touch_set(id)?;
            let set = ctx.store.set(id)?;
            run_session(set, &mut io::stdin().lock(), &mut io::stdout())
        }
    }
}

fn into_flashcards(cards: Vec<CardArg>) -> Vec<Flashcard> {
    cards
        .into_iter()
        .map(|c| Flashcard::new(c.term, c.definition, c.priority))
        .collect()
}
