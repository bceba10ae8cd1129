use crate::cli::commands::CardCommand;
use crate::validation;
use anyhow::Result;
use colored::Colorize;

pub fn handle_card(command: CardCommand) -> Result<()> {
    match command {
        CardCommand::Validate { term, definition } => {
            validation::valid_flashcard(&term, &definition)?;
            println!("{}", "Valid".green());
            Ok(())
        }
    }
}
