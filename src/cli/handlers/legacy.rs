use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};

use super::CommandContext;

pub fn handle_import_legacy(
    ctx: &mut CommandContext,
    sets: Option<PathBuf>,
    notes: Option<PathBuf>,
) -> Result<()> {
    if sets.is_none() && notes.is_none() {
        anyhow::bail!("Nothing to import. Pass --sets and/or --notes.");
    }

    if let Some(path) = sets {
        let count = ctx
            .store
            .import_legacy_sets(&path)
            .with_context(|| format!("Failed to import study sets from {}", path.display()))?;
        println!("{} {} study sets", "Imported".green(), count);
    }
    if let Some(path) = notes {
        let count = ctx
            .store
            .import_legacy_notes(&path)
            .with_context(|| format!("Failed to import notes from {}", path.display()))?;
        println!("{} {} notes", "Imported".green(), count);
    }
    Ok(())
}

pub fn handle_export_legacy(ctx: &CommandContext, dir: &Path) -> Result<()> {
    let (set_file, note_file) = ctx
        .store
        .export_legacy(dir)
        .with_context(|| format!("Failed to export to {}", dir.display()))?;
    println!("{} {}", "Exported".green(), set_file.display());
    println!("{} {}", "Exported".green(), note_file.display());
    Ok(())
}
