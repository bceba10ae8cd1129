use anyhow::{Context, Result};
use clap::Parser;

use flashstudy::cli::handlers::{
    CommandContext, handle_card, handle_export_legacy, handle_import_legacy, handle_init,
    handle_note, handle_set,
};
use flashstudy::cli::{Cli, Commands};
use flashstudy::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_file.clone());

    match cli.command {
        Commands::Init => handle_init(cli.data_dir.unwrap_or_else(|| ".".to_string())),
        Commands::Card(command) => handle_card(command),
        command => {
            let cwd = std::env::current_dir().context("Failed to read current directory")?;
            let mut ctx = CommandContext::open(cwd, cli.data_dir)
                .context("Failed to open the study databases")?;
            tracing::debug!(
                sets = ctx.store.sets().len(),
                notes = ctx.store.notes().len(),
                "databases loaded"
            );

            match command {
                Commands::Set(command) => handle_set(&mut ctx, command),
                Commands::Note(command) => handle_note(&mut ctx, command),
                Commands::ImportLegacy { sets, notes } => {
                    handle_import_legacy(&mut ctx, sets, notes)
                }
                Commands::ExportLegacy { dir } => handle_export_legacy(&ctx, &dir),
                Commands::Init | Commands::Card(_) => Ok(()),
            }
        }
    }
}
